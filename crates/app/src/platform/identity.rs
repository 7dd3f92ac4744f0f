//! Identity service client.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::{
    platform::{PlatformClient, PlatformError, client::ensure_success},
    session::{Credentials, Secret, Session, StaffUser},
};

/// Password authentication and token lifecycle.
#[automock]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, PlatformError>;

    async fn refresh_session(&self, refresh_token: &Secret) -> Result<Session, PlatformError>;

    /// Resolve the staff user an access token belongs to.
    async fn user(&self, access_token: &Secret) -> Result<StaffUser, PlatformError>;

    async fn sign_out(&self, access_token: &Secret) -> Result<(), PlatformError>;
}

/// [`IdentityProvider`] backed by the platform's auth API.
#[derive(Debug, Clone)]
pub struct RestIdentityProvider {
    client: PlatformClient,
}

impl RestIdentityProvider {
    #[must_use]
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }

    async fn grant(
        &self,
        grant_type: &str,
        body: serde_json::Value,
    ) -> Result<Session, PlatformError> {
        let response = self
            .client
            .request(Method::POST, "/auth/v1/token")
            .query(&[("grant_type", grant_type)])
            .json(&body)
            .send()
            .await?;

        let parsed: TokenResponse = ensure_success(response).await?.json().await?;

        parsed.into_session()
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, PlatformError> {
        self.grant(
            "password",
            json!({
                "email": credentials.email,
                "password": credentials.password.expose(),
            }),
        )
        .await
    }

    async fn refresh_session(&self, refresh_token: &Secret) -> Result<Session, PlatformError> {
        self.grant(
            "refresh_token",
            json!({ "refresh_token": refresh_token.expose() }),
        )
        .await
    }

    async fn user(&self, access_token: &Secret) -> Result<StaffUser, PlatformError> {
        let response = self
            .client
            .authorized(Method::GET, "/auth/v1/user", access_token.expose())
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn sign_out(&self, access_token: &Secret) -> Result<(), PlatformError> {
        let response = self
            .client
            .authorized(Method::POST, "/auth/v1/logout", access_token.expose())
            .send()
            .await?;

        ensure_success(response).await?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Secret,
    refresh_token: Secret,
    expires_in: i64,
    user: StaffUser,
}

impl TokenResponse {
    fn into_session(self) -> Result<Session, PlatformError> {
        let expires_at = Timestamp::now()
            .checked_add(SignedDuration::from_secs(self.expires_in))
            .map_err(|error| {
                PlatformError::UnexpectedResponse(format!("invalid token lifetime: {error}"))
            })?;

        Ok(Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        })
    }
}
