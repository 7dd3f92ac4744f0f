//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use shopdesk_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown category")
        }
        ProductsServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Selling price must be a number")
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Unauthorized => {
            StatusError::unauthorized().brief("Session rejected, sign in again")
        }
        ProductsServiceError::Upload(source) => {
            error!("failed to upload product image: {source}");

            StatusError::internal_server_error().brief("Image upload failed")
        }
        ProductsServiceError::Platform(source) => {
            error!("products request failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
