//! Category Errors

use salvo::http::StatusError;
use tracing::error;

use shopdesk_app::domain::categories::CategoriesServiceError;

pub(crate) fn into_status_error(error: CategoriesServiceError) -> StatusError {
    match error {
        CategoriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Category already exists")
        }
        CategoriesServiceError::InUse => {
            StatusError::conflict().brief("Category is still used by products")
        }
        CategoriesServiceError::NotFound => StatusError::not_found().brief("Category not found"),
        CategoriesServiceError::MissingName => {
            StatusError::bad_request().brief("Category name is required")
        }
        CategoriesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid category payload")
        }
        CategoriesServiceError::Unauthorized => {
            StatusError::unauthorized().brief("Session rejected, sign in again")
        }
        CategoriesServiceError::Upload(source) => {
            error!("failed to upload category icon: {source}");

            StatusError::internal_server_error().brief("Icon upload failed")
        }
        CategoriesServiceError::Platform(source) => {
            error!("categories request failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
