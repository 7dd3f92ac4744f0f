//! Dashboard service errors.

use thiserror::Error;

use crate::platform::{PlatformError, PlatformErrorKind};

#[derive(Debug, Error)]
pub enum DashboardServiceError {
    #[error("session rejected by platform")]
    Unauthorized,

    #[error("order totals overflowed")]
    Overflow,

    #[error("platform error")]
    Platform(#[source] PlatformError),
}

impl From<PlatformError> for DashboardServiceError {
    fn from(error: PlatformError) -> Self {
        match error.kind() {
            PlatformErrorKind::Unauthorized => Self::Unauthorized,
            _ => Self::Platform(error),
        }
    }
}
