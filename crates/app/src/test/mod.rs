//! Service-level test support over the in-memory platform.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
