//! User Orders Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserOrdersResponse},
};

/// User Order History
///
/// The user with every order placed under their id.
#[endpoint(
    tags("users"),
    summary = "User Order History",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User and orders"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<UserOrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    let history = state
        .app
        .users
        .user_orders(session, user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(history.into()))
}
