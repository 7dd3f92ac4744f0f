//! Session service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    platform::{IdentityProvider, PlatformErrorKind},
    session::{Credentials, Secret, Session, SessionContext, SessionServiceError, jwt},
};

#[derive(Clone)]
pub struct PlatformSessionService {
    identity: Arc<dyn IdentityProvider>,
}

impl PlatformSessionService {
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl SessionService for PlatformSessionService {
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, SessionServiceError> {
        if credentials.email.trim().is_empty() || credentials.password.is_blank() {
            return Err(SessionServiceError::MissingCredentials);
        }

        self.identity
            .sign_in_with_password(&credentials)
            .await
            .map_err(|error| match error.kind() {
                PlatformErrorKind::Unauthorized => SessionServiceError::InvalidCredentials,
                _ => SessionServiceError::Platform(error),
            })
    }

    async fn refresh(&self, refresh_token: Secret) -> Result<Session, SessionServiceError> {
        if refresh_token.is_blank() {
            return Err(SessionServiceError::InvalidToken);
        }

        Ok(self.identity.refresh_session(&refresh_token).await?)
    }

    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<SessionContext, SessionServiceError> {
        if let Some(expires_at) = jwt::expires_at(bearer_token)
            && expires_at <= Timestamp::now()
        {
            debug!(%expires_at, "rejecting expired access token");

            return Err(SessionServiceError::Expired);
        }

        let access_token = Secret::new(bearer_token);
        let user = self.identity.user(&access_token).await?;

        Ok(SessionContext { access_token, user })
    }

    async fn sign_out(&self, session: &SessionContext) -> Result<(), SessionServiceError> {
        Ok(self.identity.sign_out(&session.access_token).await?)
    }
}

/// Auth session holder: sign-in, token refresh, bearer resolution, sign-out.
#[automock]
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Exchange email and password for a session.
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, SessionServiceError>;

    /// Exchange a refresh token for a fresh session.
    async fn refresh(&self, refresh_token: Secret) -> Result<Session, SessionServiceError>;

    /// Resolve the staff member behind a bearer access token.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<SessionContext, SessionServiceError>;

    /// Revoke the session's access token.
    async fn sign_out(&self, session: &SessionContext) -> Result<(), SessionServiceError>;
}
