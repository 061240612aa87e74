//! Query pipeline: embed the question, retrieve similar chunks, and
//! generate a grounded response.

use serde_json::Value;
use tracing::debug;

use maktabati_core::config::rag::RagConfig;
use maktabati_core::result::AppResult;
use maktabati_entity::conversation::{ChatMessage, SourceRef};

use crate::gemini::{build_prompt, GeminiClient};
use crate::pinecone::PineconeClient;

/// The answer to one query, with the retrieval hits that backed it.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// The original query.
    pub query: String,
    /// The generated response.
    pub response: String,
    /// Retrieval hits used as context.
    pub sources: Vec<SourceRef>,
}

/// Runs retrieval-augmented queries against the vector index.
#[derive(Debug, Clone)]
pub struct QueryPipeline {
    gemini: GeminiClient,
    pinecone: PineconeClient,
    top_k: usize,
}

impl QueryPipeline {
    pub fn new(gemini: GeminiClient, pinecone: PineconeClient, config: &RagConfig) -> Self {
        Self {
            gemini,
            pinecone,
            top_k: config.top_k,
        }
    }

    /// Answer a query with retrieved context and threaded history.
    ///
    /// `filter` optionally restricts retrieval to a subset of chunks by
    /// metadata (e.g. a single document).
    pub async fn process_query(
        &self,
        query: &str,
        history: &[ChatMessage],
        top_k: Option<usize>,
        filter: Option<Value>,
    ) -> AppResult<QueryOutcome> {
        let embedding = self.gemini.embed(query).await?;
        let sources = self
            .pinecone
            .query(
                &self.pinecone.chunk_namespace,
                &embedding,
                top_k.unwrap_or(self.top_k),
                filter,
            )
            .await?;

        let context: Vec<String> = sources
            .iter()
            .filter_map(|s| s.metadata.get("text").and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        debug!(hits = sources.len(), usable = context.len(), "Retrieved context");

        let prompt = build_prompt(query, &context, history);
        let response = self.gemini.generate(&prompt).await?;

        Ok(QueryOutcome {
            query: query.to_string(),
            response,
            sources,
        })
    }

    /// Answer a query without retrieval, history only.
    pub async fn process_direct_query(
        &self,
        query: &str,
        history: &[ChatMessage],
    ) -> AppResult<QueryOutcome> {
        let prompt = build_prompt(query, &[], history);
        let response = self.gemini.generate(&prompt).await?;
        Ok(QueryOutcome {
            query: query.to_string(),
            response,
            sources: Vec::new(),
        })
    }
}
