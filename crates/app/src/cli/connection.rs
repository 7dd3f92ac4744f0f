use std::time::Duration;

use clap::Args;
use shopdesk_app::{
    context::AppContext,
    platform::PlatformConfig,
    session::{Credentials, Secret, SessionContext},
};

/// Platform connection and staff credentials shared by every command.
#[derive(Debug, Args)]
pub(crate) struct ConnectionArgs {
    /// Platform project URL
    #[arg(long, env = "PLATFORM_URL")]
    platform_url: String,

    /// Platform public API key
    #[arg(long, env = "PLATFORM_ANON_KEY", hide_env_values = true)]
    anon_key: String,

    /// Public object base URL; derived from the project URL when omitted
    #[arg(long, env = "PLATFORM_STORAGE_PUBLIC_URL")]
    storage_public_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "PLATFORM_TIMEOUT_SECONDS", default_value_t = 30)]
    timeout_seconds: u64,

    /// Staff account email
    #[arg(long, env = "SHOPDESK_EMAIL")]
    email: String,

    /// Staff account password
    #[arg(long, env = "SHOPDESK_PASSWORD", hide_env_values = true)]
    password: String,
}

impl ConnectionArgs {
    /// Build the services and sign in.
    pub(crate) async fn connect(self) -> Result<(AppContext, SessionContext), String> {
        let config = PlatformConfig {
            url: self.platform_url,
            anon_key: self.anon_key,
            storage_public_url: self.storage_public_url,
            timeout: Duration::from_secs(self.timeout_seconds),
        };

        // Each invocation makes a handful of calls, so nothing is cached.
        let app = AppContext::from_platform_config(config, Duration::ZERO)
            .map_err(|error| format!("failed to build platform client: {error}"))?;

        let session = app
            .session
            .sign_in(Credentials {
                email: self.email,
                password: Secret::new(self.password),
            })
            .await
            .map_err(|error| format!("failed to sign in: {error}"))?;

        Ok((app, SessionContext::from(&session)))
    }
}
