//! Session request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopdesk_app::session::{Credentials, Secret, Session, StaffUser};

/// Sign-in Request
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl From<SignInRequest> for Credentials {
    fn from(request: SignInRequest) -> Self {
        Credentials {
            email: request.email,
            password: Secret::new(request.password),
        }
    }
}

/// Refresh Request
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct RefreshRequest {
    pub refresh_token: String,
}

/// Staff User
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StaffUserResponse {
    pub id: Uuid,
    pub email: Option<String>,
}

impl From<StaffUser> for StaffUserResponse {
    fn from(user: StaffUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Session Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// RFC 3339 expiry of the access token.
    pub expires_at: String,
    pub user: StaffUserResponse,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            access_token: session.access_token.expose().to_string(),
            refresh_token: session.refresh_token.expose().to_string(),
            expires_at: session.expires_at.to_string(),
            user: session.user.into(),
        }
    }
}
