//! Shopdesk admin: platform client, domain services and staff sessions.

pub mod cache;
pub mod context;
pub mod domain;
pub mod ids;
pub mod platform;
pub mod session;

#[cfg(test)]
mod test;
