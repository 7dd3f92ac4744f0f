//! Dashboard metrics.

pub mod errors;
pub mod metrics;
mod repository;
pub mod service;

pub use errors::DashboardServiceError;
pub use service::*;
