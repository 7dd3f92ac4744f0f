//! Dashboard Errors

use salvo::http::StatusError;
use tracing::error;

use shopdesk_app::domain::dashboard::DashboardServiceError;

pub(crate) fn into_status_error(error: DashboardServiceError) -> StatusError {
    match error {
        DashboardServiceError::Unauthorized => {
            StatusError::unauthorized().brief("Session rejected, sign in again")
        }
        DashboardServiceError::Overflow => {
            error!("order totals overflowed while computing sales");

            StatusError::internal_server_error()
        }
        DashboardServiceError::Platform(source) => {
            error!("dashboard request failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
