//! Platform Config

use std::time::Duration;

use clap::Args;
use shopdesk_app::platform::PlatformConfig;

/// Backend platform connection settings.
#[derive(Debug, Args)]
pub struct PlatformArgs {
    /// Platform project URL
    #[arg(long, env = "PLATFORM_URL")]
    pub platform_url: String,

    /// Platform public API key
    #[arg(long, env = "PLATFORM_ANON_KEY", hide_env_values = true)]
    pub platform_anon_key: String,

    /// Base URL for public object links; derived from the project URL when omitted
    #[arg(long, env = "PLATFORM_STORAGE_PUBLIC_URL")]
    pub platform_storage_public_url: Option<String>,

    /// Per-request timeout for platform calls, in seconds
    #[arg(long, env = "PLATFORM_TIMEOUT_SECONDS", default_value_t = 30_u64)]
    pub platform_timeout_seconds: u64,
}

impl PlatformArgs {
    /// Convert into the client configuration.
    #[must_use]
    pub fn into_platform_config(self) -> PlatformConfig {
        PlatformConfig {
            url: self.platform_url,
            anon_key: self.platform_anon_key,
            storage_public_url: self.platform_storage_public_url,
            timeout: Duration::from_secs(self.platform_timeout_seconds),
        }
    }
}
