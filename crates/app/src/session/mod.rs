//! Staff sessions

mod errors;
mod jwt;
mod models;
mod secret;
mod service;

pub use errors::*;
pub use models::*;
pub use secret::Secret;
pub use service::*;
