//! Orchestrates document indexing into the vector index.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use maktabati_core::error::AppError;
use maktabati_core::result::AppResult;
use maktabati_database::repositories::file::FileRepository;
use maktabati_database::repositories::index::IndexRecordRepository;
use maktabati_entity::index::IndexRecord;
use maktabati_rag::document::extract_text_from_bytes;
use maktabati_rag::Indexer;
use maktabati_storage::StorageManager;

use crate::context::RequestContext;

/// Indexes stored files and raw text, keeping bookkeeping records in
/// step with the vector index.
#[derive(Debug, Clone)]
pub struct IndexingService {
    file_repo: Arc<FileRepository>,
    index_repo: Arc<IndexRecordRepository>,
    storage: Arc<StorageManager>,
    indexer: Arc<Indexer>,
}

impl IndexingService {
    /// Creates a new indexing service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        index_repo: Arc<IndexRecordRepository>,
        storage: Arc<StorageManager>,
        indexer: Arc<Indexer>,
    ) -> Self {
        Self {
            file_repo,
            index_repo,
            storage,
            indexer,
        }
    }

    /// Index a stored file: read the blob, extract text, chunk, embed,
    /// upsert, and record the outcome.
    pub async fn index_file(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        file_id: Uuid,
    ) -> AppResult<IndexRecord> {
        let file = self
            .file_repo
            .find_by_id(ctx.user_id, section_id, file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        let key = file
            .storage_path
            .clone()
            .ok_or_else(|| AppError::validation("File has no stored content to index"))?;
        let data = self.storage.get(&key).await?;
        let text = extract_text_from_bytes(&file.name, &data).await?;

        let document_id = file.id.to_string();
        let outcome = self
            .indexer
            .index_document(&document_id, &file.name, &text)
            .await?;

        let record = self
            .index_repo
            .create(
                ctx.user_id,
                section_id,
                &document_id,
                &file.name,
                &file.file_type,
                outcome.total_chunks as i32,
                outcome.successful as i32,
            )
            .await?;

        self.file_repo
            .mark_indexed(ctx.user_id, section_id, file_id)
            .await?;

        info!(
            %file_id,
            %section_id,
            total_chunks = outcome.total_chunks,
            successful = outcome.successful,
            "Indexed file"
        );
        Ok(record)
    }

    /// Index raw text under a fresh document ID.
    pub async fn index_text(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        document_name: &str,
        text: &str,
    ) -> AppResult<IndexRecord> {
        if text.trim().is_empty() {
            return Err(AppError::validation("Text must not be empty"));
        }

        let document_id = Uuid::new_v4().to_string();
        let outcome = self
            .indexer
            .index_document(&document_id, document_name, text)
            .await?;

        self.index_repo
            .create(
                ctx.user_id,
                section_id,
                &document_id,
                document_name,
                "text/plain",
                outcome.total_chunks as i32,
                outcome.successful as i32,
            )
            .await
    }

    /// List a section's index records, newest first.
    pub async fn list(&self, ctx: &RequestContext, section_id: Uuid) -> AppResult<Vec<IndexRecord>> {
        self.index_repo
            .find_all_in_section(ctx.user_id, section_id)
            .await
    }

    /// Remove an indexed document: its vectors in both namespaces, then
    /// the bookkeeping record.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        record_id: Uuid,
    ) -> AppResult<()> {
        let record = self
            .index_repo
            .find_by_id(ctx.user_id, section_id, record_id)
            .await?
            .ok_or_else(|| AppError::not_found("Index record not found"))?;

        self.indexer.remove_document(&record.document_id).await?;
        self.index_repo
            .delete(ctx.user_id, section_id, record_id)
            .await?;

        info!(%record_id, document_id = %record.document_id, "Removed indexed document");
        Ok(())
    }
}
