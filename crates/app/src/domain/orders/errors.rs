//! Orders service errors.

use thiserror::Error;

use crate::{
    domain::orders::status::UnknownStatus,
    platform::{PlatformError, PlatformErrorKind},
};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error(transparent)]
    InvalidStatus(#[from] UnknownStatus),

    #[error("invalid data")]
    InvalidData,

    #[error("session rejected by platform")]
    Unauthorized,

    #[error("platform error")]
    Platform(#[source] PlatformError),
}

impl From<PlatformError> for OrdersServiceError {
    fn from(error: PlatformError) -> Self {
        match error.kind() {
            PlatformErrorKind::CheckViolation => Self::InvalidData,
            PlatformErrorKind::NotFound => Self::NotFound,
            PlatformErrorKind::Unauthorized => Self::Unauthorized,
            _ => Self::Platform(error),
        }
    }
}
