//! Image bucket access.
//!
//! [`ObjectStore`] is the seam the API depends on. [`R2ObjectStore`] talks to
//! Cloudflare R2 (or any S3-compatible endpoint); [`MemoryObjectStore`] keeps
//! objects in process and is used by tests.

pub mod error;
pub mod memory;
pub mod r2;

use async_trait::async_trait;
use serde::Serialize;
use skillconnect_core::storage::{key_from_url, public_url};
use skillconnect_core::types::Timestamp;

pub use error::StorageError;
pub use memory::MemoryObjectStore;
pub use r2::{R2Config, R2ObjectStore};

pub type StorageResult<T> = Result<T, StorageError>;

/// An object that was just written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

/// Listing entry for an object in the bucket.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectInfo {
    pub key: String,
    pub url: String,
    pub size: i64,
    pub modified_at: Option<Timestamp>,
}

/// Put/list/delete against the image bucket.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Public base URL objects are served from, without a trailing slash.
    fn public_base(&self) -> &str;

    /// Store `bytes` under a fresh `<unix millis>-<original_name>` key.
    async fn put(
        &self,
        bytes: Vec<u8>,
        original_name: &str,
        content_type: &str,
    ) -> StorageResult<StoredObject>;

    /// Every object in the bucket.
    async fn list(&self) -> StorageResult<Vec<ObjectInfo>>;

    /// Delete by key. Deleting a key that does not exist is not an error.
    async fn delete_key(&self, key: &str) -> StorageResult<()>;

    /// Public URL for `key`.
    fn url_for(&self, key: &str) -> String {
        public_url(self.public_base(), key)
    }

    /// Key behind a public URL of this bucket.
    ///
    /// Foreign or malformed URLs are rejected without contacting the bucket.
    fn key_for_url(&self, url: &str) -> StorageResult<String> {
        Ok(key_from_url(self.public_base(), url)?)
    }

    /// Delete the object behind `url`, returning its key.
    async fn delete(&self, url: &str) -> StorageResult<String> {
        let key = self.key_for_url(url)?;
        self.delete_key(&key).await?;
        Ok(key)
    }
}
