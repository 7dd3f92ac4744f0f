//! Categories service errors.

use thiserror::Error;

use crate::platform::{PlatformError, PlatformErrorKind};

#[derive(Debug, Error)]
pub enum CategoriesServiceError {
    #[error("category already exists")]
    AlreadyExists,

    #[error("category not found")]
    NotFound,

    #[error("category name is required")]
    MissingName,

    /// Products still reference the category.
    #[error("category is in use")]
    InUse,

    #[error("invalid data")]
    InvalidData,

    #[error("session rejected by platform")]
    Unauthorized,

    #[error("icon upload failed")]
    Upload(#[source] PlatformError),

    #[error("platform error")]
    Platform(#[source] PlatformError),
}

impl From<PlatformError> for CategoriesServiceError {
    fn from(error: PlatformError) -> Self {
        match error.kind() {
            PlatformErrorKind::UniqueViolation => Self::AlreadyExists,
            PlatformErrorKind::ForeignKeyViolation => Self::InUse,
            PlatformErrorKind::NotNullViolation => Self::MissingName,
            PlatformErrorKind::CheckViolation => Self::InvalidData,
            PlatformErrorKind::NotFound => Self::NotFound,
            PlatformErrorKind::Unauthorized => Self::Unauthorized,
            PlatformErrorKind::Other => Self::Platform(error),
        }
    }
}
