//! Products service errors.

use thiserror::Error;

use crate::platform::{PlatformError, PlatformErrorKind};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("invalid price value")]
    InvalidPrice(#[from] rust_decimal::Error),

    #[error("session rejected by platform")]
    Unauthorized,

    #[error("image upload failed")]
    Upload(#[source] PlatformError),

    #[error("platform error")]
    Platform(#[source] PlatformError),
}

impl From<PlatformError> for ProductsServiceError {
    fn from(error: PlatformError) -> Self {
        match error.kind() {
            PlatformErrorKind::UniqueViolation => Self::AlreadyExists,
            PlatformErrorKind::ForeignKeyViolation => Self::InvalidReference,
            PlatformErrorKind::NotNullViolation => Self::MissingRequiredData,
            PlatformErrorKind::CheckViolation => Self::InvalidData,
            PlatformErrorKind::NotFound => Self::NotFound,
            PlatformErrorKind::Unauthorized => Self::Unauthorized,
            PlatformErrorKind::Other => Self::Platform(error),
        }
    }
}
