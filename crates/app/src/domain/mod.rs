//! Shopdesk Domain Concerns

pub mod assets;
pub mod categories;
pub mod collections;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod users;
