//! Sign-in Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    session::{
        errors::into_status_error,
        models::{SessionResponse, SignInRequest},
    },
    state::State,
};

/// Sign In
///
/// Exchanges staff credentials for an access and refresh token.
#[endpoint(
    tags("session"),
    summary = "Sign In",
    responses(
        (status_code = StatusCode::CREATED, description = "Signed in"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing email or password"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid login credentials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SignInRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = state
        .app
        .session
        .sign_in(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(user = %session.user.id, "staff signed in");

    res.status_code(StatusCode::CREATED);

    Ok(Json(session.into()))
}
