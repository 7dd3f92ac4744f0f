//! Session Errors

use salvo::http::StatusError;
use tracing::error;

use shopdesk_app::session::SessionServiceError;

pub(crate) fn into_status_error(error: SessionServiceError) -> StatusError {
    match error {
        SessionServiceError::MissingCredentials => {
            StatusError::bad_request().brief("Email and password are required")
        }
        SessionServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid login credentials")
        }
        SessionServiceError::InvalidToken => StatusError::unauthorized().brief("Invalid session"),
        SessionServiceError::Expired => StatusError::unauthorized().brief("Session expired"),
        SessionServiceError::Platform(source) => {
            error!("identity service request failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
