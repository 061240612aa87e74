//! Retrieval-augmented-generation configuration (Pinecone + Gemini).

use serde::{Deserialize, Serialize};

/// RAG pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Pinecone vector index settings.
    pub pinecone: PineconeConfig,
    /// Gemini generation/embedding settings.
    pub gemini: GeminiConfig,
    /// Chunk size in characters for document splitting.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Overlap in characters between consecutive chunks.
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
    /// Default number of similar chunks retrieved per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Number of stored conversation turns threaded into each prompt.
    #[serde(default = "default_history_limit")]
    pub history_limit: i64,
    /// Timeout in seconds for outbound Pinecone/Gemini requests.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

/// Pinecone managed vector index settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PineconeConfig {
    /// API key for the Pinecone project.
    pub api_key: String,
    /// Index host URL, e.g. `https://docs-abc123.svc.us-east-1.pinecone.io`.
    pub index_host: String,
    /// Namespace for document-chunk vectors.
    #[serde(default = "default_chunk_namespace")]
    pub chunk_namespace: String,
    /// Namespace for filename vectors used by semantic search.
    #[serde(default = "default_name_namespace")]
    pub name_namespace: String,
}

/// Gemini API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key for the Gemini project.
    pub api_key: String,
    /// Base URL of the generative-language API.
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Generation model name.
    #[serde(default = "default_generation_model")]
    pub generation_model: String,
    /// Embedding model name.
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
}

fn default_chunk_size() -> usize {
    1000
}

fn default_chunk_overlap() -> usize {
    200
}

fn default_top_k() -> usize {
    5
}

fn default_history_limit() -> i64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

fn default_chunk_namespace() -> String {
    "chunks".to_string()
}

fn default_name_namespace() -> String {
    "names".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_generation_model() -> String {
    "gemini-pro".to_string()
}

fn default_embedding_model() -> String {
    "embedding-001".to_string()
}
