//! Semantic filename search over the name namespace.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use maktabati_core::result::AppResult;
use maktabati_database::repositories::file::FileRepository;
use maktabati_entity::file::File;
use maktabati_rag::{GeminiClient, PineconeClient};

use crate::context::RequestContext;

/// One filename match, with the file record when it still exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// The matched document's ID.
    pub document_id: String,
    /// The matched document's name.
    pub document_name: String,
    /// Best similarity score across all query variants.
    pub score: f32,
    /// The backing file record, when the document is a stored file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
}

/// Finds documents whose names semantically match a description.
#[derive(Debug, Clone)]
pub struct SearchService {
    file_repo: Arc<FileRepository>,
    gemini: Arc<GeminiClient>,
    pinecone: Arc<PineconeClient>,
    top_k: usize,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        gemini: Arc<GeminiClient>,
        pinecone: Arc<PineconeClient>,
        top_k: usize,
    ) -> Self {
        Self {
            file_repo,
            gemini,
            pinecone,
            top_k,
        }
    }

    /// Search filenames by description.
    ///
    /// The query is expanded into likely name variants, each variant is
    /// embedded and matched against the name namespace, and hits are
    /// deduplicated by document keeping the best score.
    pub async fn search(&self, ctx: &RequestContext, query: &str) -> AppResult<Vec<SearchHit>> {
        let variants = self.gemini.suggest_filenames(query).await?;
        debug!(query, variants = variants.len(), "Expanded search query");

        let mut best: HashMap<String, SearchHit> = HashMap::new();
        for variant in &variants {
            let embedding = self.gemini.embed(variant).await?;
            let matches = self
                .pinecone
                .query(&self.pinecone.name_namespace, &embedding, self.top_k, None)
                .await?;
            for hit in matches {
                let name = hit
                    .metadata
                    .get("documentName")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                best.entry(hit.id.clone())
                    .and_modify(|existing| {
                        if hit.score > existing.score {
                            existing.score = hit.score;
                        }
                    })
                    .or_insert(SearchHit {
                        document_id: hit.id,
                        document_name: name,
                        score: hit.score,
                        file: None,
                    });
            }
        }

        let file_ids: Vec<Uuid> = best
            .keys()
            .filter_map(|id| Uuid::parse_str(id).ok())
            .collect();
        if !file_ids.is_empty() {
            let files = self.file_repo.find_by_ids(ctx.user_id, &file_ids).await?;
            for file in files {
                if let Some(hit) = best.get_mut(&file.id.to_string()) {
                    hit.file = Some(file);
                }
            }
        }

        let mut hits: Vec<SearchHit> = best.into_values().collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(hits)
    }
}
