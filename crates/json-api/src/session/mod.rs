//! Staff sessions: sign-in, refresh, sign-out and the session guard.

pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod models;

pub(crate) use handlers::*;
