//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use shopdesk_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::InvalidStatus(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Unauthorized => {
            StatusError::unauthorized().brief("Session rejected, sign in again")
        }
        OrdersServiceError::Platform(source) => {
            error!("orders request failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
