//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use shopdesk_app::session::SessionContext;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Store the session resolved by the session guard.
    fn insert_session(&mut self, session: SessionContext);

    /// Session resolved by the session guard, or 401 when none was stored.
    fn session_or_401(&self) -> Result<&SessionContext, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session(&mut self, session: SessionContext) {
        self.inject(session);
    }

    fn session_or_401(&self) -> Result<&SessionContext, StatusError> {
        self.obtain::<SessionContext>()
            .map_err(|_ignored| StatusError::unauthorized().brief("Sign in required"))
    }
}
