//! Dashboard Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    dashboard::{errors::into_status_error, models::DashboardResponse},
    extensions::*,
    state::State,
};

/// Dashboard
///
/// Product, user and order counts with total sales.
#[endpoint(
    tags("dashboard"),
    summary = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Dashboard metrics"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    let metrics = state
        .app
        .dashboard
        .metrics(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(metrics.into()))
}
