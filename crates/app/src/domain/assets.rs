//! Image and icon uploads.

use std::sync::Arc;

use tracing::{info, warn};

use crate::platform::{FileUpload, ObjectStore, PlatformError};

/// Storage bucket and the folder objects are written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub name: &'static str,
    pub folder: &'static str,
}

pub const PRODUCT_IMAGES: Bucket = Bucket {
    name: "products",
    folder: "products",
};

pub const CATEGORY_ICONS: Bucket = Bucket {
    name: "categories",
    folder: "categories",
};

/// An uploaded object and its public link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub bucket: &'static str,
    pub path: String,
    pub public_url: String,
}

#[derive(Clone)]
pub(crate) struct AssetStore {
    objects: Arc<dyn ObjectStore>,
}

impl AssetStore {
    pub(crate) fn new(objects: Arc<dyn ObjectStore>) -> Self {
        Self { objects }
    }

    /// Upload `file` to `{folder}/{file name}` in `bucket`, replacing any object already there.
    pub(crate) async fn store(
        &self,
        token: &str,
        bucket: Bucket,
        file: FileUpload,
    ) -> Result<StoredAsset, PlatformError> {
        let path = format!("{}/{}", bucket.folder, file.base_name());

        self.objects.upload(token, bucket.name, &path, file).await?;

        info!(bucket = bucket.name, path, "asset uploaded");

        Ok(StoredAsset {
            bucket: bucket.name,
            public_url: self.objects.public_url(bucket.name, &path),
            path,
        })
    }

    /// Upload `file` when one was submitted.
    pub(crate) async fn store_optional(
        &self,
        token: &str,
        bucket: Bucket,
        file: Option<FileUpload>,
    ) -> Result<Option<StoredAsset>, PlatformError> {
        match file {
            Some(file) => self.store(token, bucket, file).await.map(Some),
            None => Ok(None),
        }
    }
}

/// Log an object whose row insert or update failed after the upload succeeded.
///
/// The object is not removed: upsert paths are keyed by file name and may
/// already back other rows.
pub(crate) fn warn_orphaned(asset: Option<&StoredAsset>, error: &PlatformError) {
    if let Some(asset) = asset {
        warn!(
            bucket = asset.bucket,
            path = %asset.path,
            "uploaded object has no row after failed write: {error}"
        );
    }
}
