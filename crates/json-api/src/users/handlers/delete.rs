//! Delete User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Delete User
///
/// Removes the user row only. Orders placed by the user are kept.
#[endpoint(
    tags("users"),
    summary = "Delete User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "User deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "users.delete", skip(user, depot), err)]
pub(crate) async fn handler(
    user: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;
    let user = user.into_inner();

    state
        .app
        .users
        .delete_user(session, user.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(user_id = user, "deleted user");

    Ok(StatusCode::NO_CONTENT)
}
