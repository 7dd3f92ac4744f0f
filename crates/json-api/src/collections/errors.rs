//! Collection Errors

use salvo::http::StatusError;
use tracing::error;

use shopdesk_app::domain::collections::CollectionsServiceError;

pub(crate) fn into_status_error(error: CollectionsServiceError) -> StatusError {
    match error {
        CollectionsServiceError::AlreadyMember => {
            StatusError::conflict().brief("Product is already in the collection")
        }
        CollectionsServiceError::NotMember => {
            StatusError::not_found().brief("Product is not in the collection")
        }
        CollectionsServiceError::ProductNotFound => {
            StatusError::not_found().brief("Product not found")
        }
        CollectionsServiceError::Unauthorized => {
            StatusError::unauthorized().brief("Session rejected, sign in again")
        }
        CollectionsServiceError::Platform(source) => {
            error!("collections request failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
