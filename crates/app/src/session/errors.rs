//! Session service errors.

use thiserror::Error;

use crate::platform::{PlatformError, PlatformErrorKind};

#[derive(Debug, Error)]
pub enum SessionServiceError {
    #[error("email and password are required")]
    MissingCredentials,

    #[error("invalid login credentials")]
    InvalidCredentials,

    #[error("session token is invalid")]
    InvalidToken,

    #[error("session has expired")]
    Expired,

    #[error("identity service error")]
    Platform(#[source] PlatformError),
}

impl From<PlatformError> for SessionServiceError {
    fn from(error: PlatformError) -> Self {
        match error.kind() {
            PlatformErrorKind::Unauthorized | PlatformErrorKind::NotFound => Self::InvalidToken,
            _ => Self::Platform(error),
        }
    }
}
