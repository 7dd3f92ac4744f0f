//! Platform HTTP client.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::platform::{PlatformConfig, PlatformError};

/// HTTP client shared by the table, storage and identity APIs.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    config: Arc<PlatformConfig>,
    http: Client,
}

impl PlatformClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: PlatformConfig) -> Result<Self, PlatformError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.config.base_url()))
            .header("apikey", &self.config.anon_key)
    }

    pub(crate) fn authorized(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(token)
    }
}

/// Pass 2xx responses through; turn anything else into a [`PlatformError`].
pub(crate) async fn ensure_success(response: Response) -> Result<Response, PlatformError> {
    if response.status().is_success() {
        return Ok(response);
    }

    Err(PlatformError::from_response(response).await)
}
