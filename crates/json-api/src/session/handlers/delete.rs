//! Sign-out Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{extensions::*, session::errors::into_status_error, state::State};

/// Sign Out
#[endpoint(
    tags("session"),
    summary = "Sign Out",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Signed out"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_or_401()?;

    state
        .app
        .session
        .sign_out(session)
        .await
        .map_err(into_status_error)?;

    info!(user = %session.user.id, "staff signed out");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use shopdesk_app::session::MockSessionService;

    use crate::test_helpers::{TEST_ACCESS_TOKEN, guarded_session_service};

    use super::*;

    #[tokio::test]
    async fn test_sign_out_revokes_current_token() {
        let mut session = MockSessionService::new();

        session
            .expect_sign_out()
            .once()
            .withf(|session| session.token() == TEST_ACCESS_TOKEN)
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/session")
            .send(&guarded_session_service(
                session,
                Router::with_path("session").delete(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }
}
