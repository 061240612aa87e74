//! Pinecone vector-index client.
//!
//! Talks to a single serverless index over its data-plane host and keeps
//! document chunks and filename vectors in separate namespaces.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use maktabati_core::config::rag::RagConfig;
use maktabati_core::error::{AppError, ErrorKind};
use maktabati_core::result::AppResult;
use maktabati_entity::conversation::SourceRef;

/// A vector ready to be written to the index.
#[derive(Debug, Clone, Serialize)]
pub struct VectorRecord {
    /// Vector ID.
    pub id: String,
    /// Embedding values.
    pub values: Vec<f32>,
    /// Arbitrary metadata stored alongside the vector.
    pub metadata: Value,
}

#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [VectorRecord],
    namespace: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
    namespace: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Value,
}

#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<Value>,
    namespace: &'a str,
}

/// Client for the Pinecone data-plane API.
#[derive(Debug, Clone)]
pub struct PineconeClient {
    client: reqwest::Client,
    index_host: String,
    api_key: String,
    /// Namespace for document-chunk vectors.
    pub chunk_namespace: String,
    /// Namespace for filename vectors.
    pub name_namespace: String,
}

impl PineconeClient {
    /// Build a client from RAG configuration.
    pub fn new(config: &RagConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            index_host: config.pinecone.index_host.trim_end_matches('/').to_string(),
            api_key: config.pinecone.api_key.clone(),
            chunk_namespace: config.pinecone.chunk_namespace.clone(),
            name_namespace: config.pinecone.name_namespace.clone(),
        })
    }

    /// Upsert vectors into a namespace.
    pub async fn upsert(&self, namespace: &str, vectors: &[VectorRecord]) -> AppResult<()> {
        if vectors.is_empty() {
            return Ok(());
        }
        let request = UpsertRequest { vectors, namespace };
        let _: Value = self.post("/vectors/upsert", &request, "upsert").await?;
        debug!(namespace, count = vectors.len(), "Upserted vectors");
        Ok(())
    }

    /// Query a namespace for the `top_k` nearest vectors, optionally
    /// restricted by a metadata filter.
    pub async fn query(
        &self,
        namespace: &str,
        vector: &[f32],
        top_k: usize,
        filter: Option<Value>,
    ) -> AppResult<Vec<SourceRef>> {
        let request = QueryRequest {
            vector,
            top_k,
            include_metadata: true,
            namespace,
            filter,
        };
        let response: QueryResponse = self.post("/query", &request, "query").await?;
        Ok(response
            .matches
            .into_iter()
            .map(|m| SourceRef {
                id: m.id,
                score: m.score,
                metadata: m.metadata,
            })
            .collect())
    }

    /// Delete vectors by ID from a namespace.
    pub async fn delete_ids(&self, namespace: &str, ids: &[String]) -> AppResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let request = DeleteRequest {
            ids: Some(ids),
            filter: None,
            namespace,
        };
        let _: Value = self.post("/vectors/delete", &request, "delete").await?;
        debug!(namespace, count = ids.len(), "Deleted vectors");
        Ok(())
    }

    /// Delete every vector matching a metadata filter from a namespace.
    pub async fn delete_by_filter(&self, namespace: &str, filter: Value) -> AppResult<()> {
        let request = DeleteRequest {
            ids: None,
            filter: Some(filter),
            namespace,
        };
        let _: Value = self.post("/vectors/delete", &request, "delete").await?;
        Ok(())
    }

    async fn post<Req: Serialize, Resp: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
        what: &str,
    ) -> AppResult<Resp> {
        let url = format!("{}{}", self.index_host, path);
        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Pinecone {what} request failed"),
                    e,
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Pinecone {what} returned {status}: {body}"
            )));
        }

        response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to decode Pinecone {what} response"),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_uses_camel_case() {
        let request = QueryRequest {
            vector: &[0.1, 0.2],
            top_k: 5,
            include_metadata: true,
            namespace: "chunks",
            filter: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["topK"], 5);
        assert_eq!(json["includeMetadata"], true);
        assert!(json.get("filter").is_none());
    }

    #[test]
    fn test_delete_request_omits_unused_selector() {
        let ids = vec!["a".to_string()];
        let request = DeleteRequest {
            ids: Some(&ids),
            filter: None,
            namespace: "chunks",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ids"][0], "a");
        assert!(json.get("filter").is_none());
    }
}
