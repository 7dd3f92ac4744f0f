//! Users service errors.

use thiserror::Error;

use crate::platform::{PlatformError, PlatformErrorKind};

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("user not found")]
    NotFound,

    /// Other rows still reference the user.
    #[error("user is referenced by other records")]
    InvalidReference,

    #[error("session rejected by platform")]
    Unauthorized,

    #[error("platform error")]
    Platform(#[source] PlatformError),
}

impl From<PlatformError> for UsersServiceError {
    fn from(error: PlatformError) -> Self {
        match error.kind() {
            PlatformErrorKind::ForeignKeyViolation => Self::InvalidReference,
            PlatformErrorKind::NotFound => Self::NotFound,
            PlatformErrorKind::Unauthorized => Self::Unauthorized,
            _ => Self::Platform(error),
        }
    }
}
