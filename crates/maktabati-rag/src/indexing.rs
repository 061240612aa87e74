//! Document indexing: chunk, embed, and upsert into the vector index.

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use maktabati_core::config::rag::RagConfig;
use maktabati_core::result::AppResult;

use crate::chunker::split_text;
use crate::gemini::GeminiClient;
use crate::pinecone::{PineconeClient, VectorRecord};

/// Result of indexing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutcome {
    /// The indexed document's ID.
    pub document_id: String,
    /// Number of chunks the document was split into.
    pub total_chunks: usize,
    /// Chunks embedded and upserted successfully.
    pub successful: usize,
    /// Chunks that failed to embed or upsert.
    pub failed: usize,
}

/// Chunks documents, embeds each chunk, and writes vectors to the index.
#[derive(Debug, Clone)]
pub struct Indexer {
    gemini: GeminiClient,
    pinecone: PineconeClient,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Indexer {
    pub fn new(gemini: GeminiClient, pinecone: PineconeClient, config: &RagConfig) -> Self {
        Self {
            gemini,
            pinecone,
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        }
    }

    /// Index a document's extracted text.
    ///
    /// Each chunk is embedded and upserted individually so one bad chunk
    /// does not abort the whole document. The filename is also embedded
    /// into the name namespace for semantic filename search.
    pub async fn index_document(
        &self,
        document_id: &str,
        document_name: &str,
        text: &str,
    ) -> AppResult<IndexOutcome> {
        let chunks = split_text(text, self.chunk_size, self.chunk_overlap);
        let total_chunks = chunks.len();
        let indexed_at = Utc::now().to_rfc3339();

        let mut successful = 0usize;
        let mut failed = 0usize;

        for chunk in &chunks {
            let vector_id = Uuid::new_v4().to_string();
            let result = async {
                let values = self.gemini.embed(&chunk.text).await?;
                let record = VectorRecord {
                    id: vector_id.clone(),
                    values,
                    metadata: json!({
                        "documentId": document_id,
                        "documentName": document_name,
                        "chunkIndex": chunk.chunk_index,
                        "totalChunks": chunk.total_chunks,
                        "text": chunk.text,
                        "indexedAt": indexed_at,
                    }),
                };
                self.pinecone
                    .upsert(&self.pinecone.chunk_namespace, &[record])
                    .await
            }
            .await;

            match result {
                Ok(()) => successful += 1,
                Err(error) => {
                    warn!(
                        document_id,
                        chunk_index = chunk.chunk_index,
                        %error,
                        "Failed to index chunk"
                    );
                    failed += 1;
                }
            }
        }

        self.index_name(document_id, document_name).await?;

        info!(document_id, total_chunks, successful, failed, "Indexed document");
        Ok(IndexOutcome {
            document_id: document_id.to_string(),
            total_chunks,
            successful,
            failed,
        })
    }

    /// Embed a document's filename into the name namespace.
    async fn index_name(&self, document_id: &str, document_name: &str) -> AppResult<()> {
        let values = self.gemini.embed(document_name).await?;
        let record = VectorRecord {
            id: document_id.to_string(),
            values,
            metadata: json!({
                "documentId": document_id,
                "documentName": document_name,
            }),
        };
        self.pinecone
            .upsert(&self.pinecone.name_namespace, &[record])
            .await
    }

    /// Remove every vector belonging to a document from both namespaces.
    pub async fn remove_document(&self, document_id: &str) -> AppResult<()> {
        self.pinecone
            .delete_by_filter(
                &self.pinecone.chunk_namespace,
                json!({ "documentId": { "$eq": document_id } }),
            )
            .await?;
        self.pinecone
            .delete_ids(
                &self.pinecone.name_namespace,
                &[document_id.to_string()],
            )
            .await?;
        info!(document_id, "Removed document vectors");
        Ok(())
    }
}
