//! Storage provider abstraction.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// A blob storage backend.
///
/// Keys are slash-separated relative paths, e.g.
/// `users/{owner}/sections/{section}/{timestamp}_{name}`.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Provider type identifier (`"local"`, `"http"`).
    fn provider_type(&self) -> &str;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store a blob under the given key, overwriting any existing blob.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()>;

    /// Fetch the blob stored under the given key.
    async fn get(&self, key: &str) -> AppResult<Bytes>;

    /// Delete the blob stored under the given key, if present.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
