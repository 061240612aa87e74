//! Remote HTTP storage provider.
//!
//! Talks to the external file-storage endpoint: blobs are PUT under their
//! key, fetched with GET, and removed with DELETE. The endpoint is trusted
//! to be idempotent per key.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use maktabati_core::config::storage::StorageConfig;
use maktabati_core::error::{AppError, ErrorKind};
use maktabati_core::result::AppResult;
use maktabati_core::traits::storage::StorageProvider;

/// Remote HTTP endpoint storage provider.
#[derive(Debug, Clone)]
pub struct HttpStorageProvider {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpStorageProvider {
    /// Create a provider for the configured upload endpoint.
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        if config.endpoint.is_empty() {
            return Err(AppError::configuration(
                "storage.endpoint is required for the http provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token: (!config.endpoint_token.is_empty()).then(|| config.endpoint_token.clone()),
        })
    }

    fn url(&self, key: &str) -> String {
        format!("{}/{}", self.endpoint, key.trim_start_matches('/'))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl StorageProvider for HttpStorageProvider {
    fn provider_type(&self) -> &str {
        "http"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let response = self
            .authorize(self.client.head(&self.endpoint))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Storage endpoint unreachable", e)
            })?;
        Ok(!response.status().is_server_error())
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        let response = self
            .authorize(self.client.put(self.url(key)))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data.clone())
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("Upload failed: {key}"), e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::storage(format!(
                "Upload rejected with status {} for key {key}",
                response.status()
            )));
        }

        debug!(key, bytes = data.len(), "Uploaded blob");
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Bytes> {
        let response = self
            .authorize(self.client.get(self.url(key)))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("Download failed: {key}"), e)
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("Blob not found: {key}")));
        }
        if !response.status().is_success() {
            return Err(AppError::storage(format!(
                "Download rejected with status {} for key {key}",
                response.status()
            )));
        }

        response.bytes().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to read body: {key}"), e)
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let response = self
            .authorize(self.client.delete(self.url(key)))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("Delete failed: {key}"), e)
            })?;

        // Missing blobs are fine; deletion is idempotent.
        if !response.status().is_success() && response.status() != reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::storage(format!(
                "Delete rejected with status {} for key {key}",
                response.status()
            )));
        }
        Ok(())
    }
}
