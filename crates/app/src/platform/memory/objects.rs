//! In-memory object store.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;

use crate::platform::{FileUpload, ObjectStore, PlatformError};

const PUBLIC_BASE: &str = "memory://storage/v1/object/public";

#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: Mutex<FxHashMap<(String, String), FileUpload>>,
    rejecting: AtomicBool,
}

impl MemoryObjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following upload fail as if the bucket refused it.
    pub fn reject_uploads(&self) {
        self.rejecting.store(true, Ordering::Relaxed);
    }

    pub async fn object(&self, bucket: &str, path: &str) -> Option<FileUpload> {
        self.objects
            .lock()
            .await
            .get(&(bucket.to_string(), path.to_string()))
            .cloned()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(
        &self,
        _token: &str,
        bucket: &str,
        path: &str,
        file: FileUpload,
    ) -> Result<(), PlatformError> {
        if self.rejecting.load(Ordering::Relaxed) {
            return Err(PlatformError::api(403, "403", "new row violates row-level security policy"));
        }

        self.objects
            .lock()
            .await
            .insert((bucket.to_string(), path.to_string()), file);

        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{PUBLIC_BASE}/{bucket}/{path}")
    }
}
