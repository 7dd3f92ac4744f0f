//! Platform Config

use std::time::Duration;

/// Connection settings for the hosted backend platform.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Project base URL, e.g. `"https://abc.supabase.co"`.
    pub url: String,

    /// Public API key sent with every request.
    pub anon_key: String,

    /// Base URL for public object links. Derived from `url` when absent.
    pub storage_public_url: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl PlatformConfig {
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Base URL that public object paths are appended to.
    #[must_use]
    pub fn public_object_base(&self) -> String {
        self.storage_public_url.as_deref().map_or_else(
            || format!("{}/storage/v1/object/public", self.base_url()),
            |url| url.trim_end_matches('/').to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(storage_public_url: Option<&str>) -> PlatformConfig {
        PlatformConfig {
            url: "https://shop.example.com/".to_string(),
            anon_key: "anon".to_string(),
            storage_public_url: storage_public_url.map(str::to_string),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn public_object_base_defaults_to_project_storage() {
        assert_eq!(
            config(None).public_object_base(),
            "https://shop.example.com/storage/v1/object/public"
        );
    }

    #[test]
    fn public_object_base_prefers_override() {
        assert_eq!(
            config(Some("https://cdn.example.com/public/")).public_object_base(),
            "https://cdn.example.com/public"
        );
    }
}
