//! Cache Config

use std::time::Duration;

use clap::Args;

/// Entity cache settings.
#[derive(Debug, Args)]
pub struct CacheConfig {
    /// Seconds a cached entity list stays fresh; 0 disables caching
    #[arg(long, env = "CACHE_TTL_SECONDS", default_value_t = 30_u64)]
    pub cache_ttl_seconds: u64,
}

impl CacheConfig {
    /// Cache time-to-live.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}
