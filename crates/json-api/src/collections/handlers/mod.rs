//! Collection Handlers

pub(crate) mod delete;
pub(crate) mod index;
