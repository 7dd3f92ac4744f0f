//! User Errors

use salvo::http::StatusError;
use tracing::error;

use shopdesk_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::InvalidReference => {
            StatusError::conflict().brief("User is referenced by other records")
        }
        UsersServiceError::Unauthorized => {
            StatusError::unauthorized().brief("Session rejected, sign in again")
        }
        UsersServiceError::Platform(source) => {
            error!("users request failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
