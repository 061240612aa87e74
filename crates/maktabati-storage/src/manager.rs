//! Storage manager: provider selection and public URL derivation.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use maktabati_core::config::storage::StorageConfig;
use maktabati_core::error::AppError;
use maktabati_core::result::AppResult;
use maktabati_core::traits::storage::StorageProvider;

use crate::providers::{HttpStorageProvider, LocalStorageProvider};

/// Owns the configured storage provider and builds object keys/URLs.
#[derive(Clone)]
pub struct StorageManager {
    provider: Arc<dyn StorageProvider>,
    public_base_url: String,
}

impl std::fmt::Debug for StorageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageManager")
            .field("provider", &self.provider.provider_type())
            .field("public_base_url", &self.public_base_url)
            .finish()
    }
}

impl StorageManager {
    /// Initialize the provider named in configuration.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let provider: Arc<dyn StorageProvider> = match config.provider.as_str() {
            "local" => Arc::new(LocalStorageProvider::new(&config.data_root).await?),
            "http" => Arc::new(HttpStorageProvider::new(config)?),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: {other}"
                )));
            }
        };

        info!(provider = provider.provider_type(), "Storage initialized");

        Ok(Self {
            provider,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the storage key for an uploaded file.
    ///
    /// Mirrors the layout `users/{owner}/sections/{section}/{ts}_{name}` so
    /// keys stay unique per upload even when names repeat.
    pub fn object_key(&self, owner_id: Uuid, section_id: Uuid, file_name: &str) -> String {
        format!(
            "users/{owner_id}/sections/{section_id}/{}_{file_name}",
            Utc::now().timestamp_millis()
        )
    }

    /// The public URL at which a stored key can be fetched.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key.trim_start_matches('/'))
    }

    /// Store a blob.
    pub async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        self.provider.put(key, data, content_type).await
    }

    /// Fetch a blob.
    pub async fn get(&self, key: &str) -> AppResult<Bytes> {
        self.provider.get(key).await
    }

    /// Delete a blob.
    pub async fn delete(&self, key: &str) -> AppResult<()> {
        self.provider.delete(key).await
    }

    /// Check provider health.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }
}
