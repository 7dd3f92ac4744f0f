//! Refresh Session Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use shopdesk_app::session::Secret;

use crate::{
    extensions::*,
    session::{
        errors::into_status_error,
        models::{RefreshRequest, SessionResponse},
    },
    state::State,
};

/// Refresh Session
#[endpoint(
    tags("session"),
    summary = "Refresh Session",
    responses(
        (status_code = StatusCode::OK, description = "New session issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Refresh token rejected"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RefreshRequest>,
    depot: &mut Depot,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = state
        .app
        .session
        .refresh(Secret::new(json.into_inner().refresh_token))
        .await
        .map_err(into_status_error)?;

    Ok(Json(session.into()))
}
