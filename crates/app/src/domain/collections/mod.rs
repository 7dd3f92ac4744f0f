//! Featured and popular product collections.

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::CollectionsServiceError;
pub use service::*;
