//! In-memory identity provider.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    platform::{IdentityProvider, PlatformError},
    session::{Credentials, Secret, Session, StaffUser},
};

const SESSION_LIFETIME: SignedDuration = SignedDuration::from_hours(1);

#[derive(Debug, Default)]
struct IdentityState {
    /// Accounts keyed by email.
    accounts: FxHashMap<String, (Secret, StaffUser)>,
    access_tokens: FxHashMap<String, StaffUser>,
    refresh_tokens: FxHashMap<String, StaffUser>,
}

impl IdentityState {
    fn issue(&mut self, user: StaffUser) -> Session {
        let access_token = Uuid::new_v4().to_string();
        let refresh_token = Uuid::new_v4().to_string();

        self.access_tokens.insert(access_token.clone(), user.clone());
        self.refresh_tokens.insert(refresh_token.clone(), user.clone());

        Session {
            access_token: Secret::new(access_token),
            refresh_token: Secret::new(refresh_token),
            expires_at: Timestamp::now()
                .checked_add(SESSION_LIFETIME)
                .unwrap_or(Timestamp::MAX),
            user,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    state: Mutex<IdentityState>,
}

impl MemoryIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a staff account that can sign in with `password`.
    #[must_use]
    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        let user = StaffUser {
            id: Uuid::now_v7(),
            email: Some(email.to_string()),
        };

        self.state
            .get_mut()
            .accounts
            .insert(email.to_string(), (Secret::new(password), user));

        self
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, PlatformError> {
        let mut state = self.state.lock().await;

        let user = match state.accounts.get(&credentials.email) {
            Some((password, user)) if *password == credentials.password => user.clone(),
            _ => {
                return Err(PlatformError::api(
                    400,
                    "invalid_credentials",
                    "Invalid login credentials",
                ));
            }
        };

        Ok(state.issue(user))
    }

    async fn refresh_session(&self, refresh_token: &Secret) -> Result<Session, PlatformError> {
        let mut state = self.state.lock().await;

        let Some(user) = state.refresh_tokens.remove(refresh_token.expose()) else {
            return Err(PlatformError::api(
                400,
                "invalid_grant",
                "Invalid Refresh Token: Refresh Token Not Found",
            ));
        };

        Ok(state.issue(user))
    }

    async fn user(&self, access_token: &Secret) -> Result<StaffUser, PlatformError> {
        self.state
            .lock()
            .await
            .access_tokens
            .get(access_token.expose())
            .cloned()
            .ok_or_else(|| PlatformError::api(401, "bad_jwt", "invalid JWT"))
    }

    async fn sign_out(&self, access_token: &Secret) -> Result<(), PlatformError> {
        self.state
            .lock()
            .await
            .access_tokens
            .remove(access_token.expose())
            .map(|_| ())
            .ok_or_else(|| PlatformError::api(401, "bad_jwt", "invalid JWT"))
    }
}
