//! Collections service errors.

use thiserror::Error;

use crate::platform::{PlatformError, PlatformErrorKind};

#[derive(Debug, Error)]
pub enum CollectionsServiceError {
    #[error("product is already in the collection")]
    AlreadyMember,

    #[error("product is not in the collection")]
    NotMember,

    #[error("product not found")]
    ProductNotFound,

    #[error("session rejected by platform")]
    Unauthorized,

    #[error("platform error")]
    Platform(#[source] PlatformError),
}

impl From<PlatformError> for CollectionsServiceError {
    fn from(error: PlatformError) -> Self {
        match error.kind() {
            PlatformErrorKind::UniqueViolation => Self::AlreadyMember,
            PlatformErrorKind::ForeignKeyViolation => Self::ProductNotFound,
            PlatformErrorKind::NotFound => Self::NotMember,
            PlatformErrorKind::Unauthorized => Self::Unauthorized,
            _ => Self::Platform(error),
        }
    }
}
