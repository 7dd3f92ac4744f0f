//! Current Session Handler

use salvo::prelude::*;

use crate::{extensions::*, session::models::StaffUserResponse};

/// Current Staff User
#[endpoint(
    tags("session"),
    summary = "Current Staff User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Signed-in staff user"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StaffUserResponse>, StatusError> {
    let session = depot.session_or_401()?;

    Ok(Json(session.user.clone().into()))
}
