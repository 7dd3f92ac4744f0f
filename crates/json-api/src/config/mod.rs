//! Server configuration module

use clap::Parser;

use crate::config::{
    cache::CacheConfig, logging::LoggingConfig, platform::PlatformArgs,
    server::ServerRuntimeConfig,
};

pub(crate) mod cache;
pub(crate) mod logging;
pub(crate) mod platform;
pub(crate) mod server;

/// Shopdesk JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "shopdesk-json", about = "Shopdesk JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Backend platform connection settings.
    #[command(flatten)]
    pub platform: PlatformArgs,

    /// Entity cache settings.
    #[command(flatten)]
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
