//! Dashboard page

pub(crate) mod errors;
pub(crate) mod get;
pub(crate) mod models;
