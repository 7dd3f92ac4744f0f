//! Session data models.

use jiff::Timestamp;
use serde::Deserialize;
use uuid::Uuid;

use crate::session::Secret;

/// Email and password submitted on the login screen.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Secret,
}

/// Staff member known to the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaffUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Tokens issued by the identity service after sign-in or refresh.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: Secret,
    pub refresh_token: Secret,
    pub expires_at: Timestamp,
    pub user: StaffUser,
}

/// Authenticated caller handed to every data operation.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub access_token: Secret,
    pub user: StaffUser,
}

impl SessionContext {
    /// Bearer token forwarded to the platform.
    #[must_use]
    pub fn token(&self) -> &str {
        self.access_token.expose()
    }
}

impl From<&Session> for SessionContext {
    fn from(session: &Session) -> Self {
        Self {
            access_token: session.access_token.clone(),
            user: session.user.clone(),
        }
    }
}
