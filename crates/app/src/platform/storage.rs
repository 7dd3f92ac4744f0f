//! Object storage client.

use async_trait::async_trait;
use mockall::automock;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Method, header::CONTENT_TYPE};

use crate::platform::{PlatformClient, PlatformError, client::ensure_success};

/// Characters left as-is inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode each `/`-separated segment of an object path.
fn encode_object_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// A file submitted alongside a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// File name with any client-side directory components removed.
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file_name)
    }
}

/// Bucketed object storage with public links.
#[automock]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `file` at `path` inside `bucket`, replacing any existing object.
    async fn upload(
        &self,
        token: &str,
        bucket: &str,
        path: &str,
        file: FileUpload,
    ) -> Result<(), PlatformError>;

    /// Public URL of an object.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}

/// [`ObjectStore`] backed by the platform's storage API.
#[derive(Debug, Clone)]
pub struct RestObjectStore {
    client: PlatformClient,
    public_base: String,
}

impl RestObjectStore {
    #[must_use]
    pub fn new(client: PlatformClient) -> Self {
        let public_base = client.config().public_object_base();

        Self {
            client,
            public_base,
        }
    }
}

#[async_trait]
impl ObjectStore for RestObjectStore {
    async fn upload(
        &self,
        token: &str,
        bucket: &str,
        path: &str,
        file: FileUpload,
    ) -> Result<(), PlatformError> {
        let response = self
            .client
            .authorized(
                Method::POST,
                &format!(
                    "/storage/v1/object/{}/{}",
                    encode_object_path(bucket),
                    encode_object_path(path)
                ),
                token,
            )
            .header("x-upsert", "true")
            .header(CONTENT_TYPE, file.content_type)
            .body(file.bytes)
            .send()
            .await?;

        ensure_success(response).await?;

        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base,
            encode_object_path(bucket),
            encode_object_path(path)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use crate::platform::PlatformConfig;

    use super::*;

    #[test]
    fn public_url_concatenates_base_bucket_and_path() -> TestResult {
        let client = PlatformClient::new(PlatformConfig {
            url: "https://shop.example.com".to_string(),
            anon_key: "anon".to_string(),
            storage_public_url: None,
            timeout: Duration::from_secs(5),
        })?;

        let store = RestObjectStore::new(client);

        assert_eq!(
            store.public_url("products", "products/shoe.png"),
            "https://shop.example.com/storage/v1/object/public/products/products/shoe.png"
        );

        Ok(())
    }

    #[test]
    fn object_paths_are_encoded_per_segment() {
        assert_eq!(encode_object_path("products/shoe.png"), "products/shoe.png");
        assert_eq!(
            encode_object_path("products/shoe #1?.png"),
            "products/shoe%20%231%3F.png"
        );
        assert_eq!(encode_object_path("products/bötte.png"), "products/b%C3%B6tte.png");
    }

    #[test]
    fn public_url_keeps_reserved_characters_in_the_path() -> TestResult {
        let client = PlatformClient::new(PlatformConfig {
            url: "https://shop.example.com".to_string(),
            anon_key: "anon".to_string(),
            storage_public_url: None,
            timeout: Duration::from_secs(5),
        })?;

        let store = RestObjectStore::new(client);

        assert_eq!(
            store.public_url("categories", "categories/mugs#2.svg"),
            "https://shop.example.com/storage/v1/object/public/categories/categories/mugs%232.svg"
        );

        Ok(())
    }

    #[test]
    fn base_name_strips_client_directories() {
        let upload = FileUpload {
            file_name: "C:\\photos\\shoe.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: Vec::new(),
        };

        assert_eq!(upload.base_name(), "shoe.png");
    }
}
