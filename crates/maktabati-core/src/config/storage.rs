//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Provider type: `"local"` or `"http"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Root directory for the local provider.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Upload endpoint for the http provider.
    #[serde(default)]
    pub endpoint: String,
    /// Bearer token sent to the http provider, if any.
    #[serde(default)]
    pub endpoint_token: String,
    /// Base URL prepended to stored object keys to form public file URLs.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_data_root() -> String {
    "data/uploads".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/files".to_string()
}
