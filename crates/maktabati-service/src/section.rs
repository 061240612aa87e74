//! Section lifecycle: the top-level containers of the library.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use maktabati_core::error::AppError;
use maktabati_core::result::AppResult;
use maktabati_database::repositories::index::IndexRecordRepository;
use maktabati_database::repositories::section::SectionRepository;
use maktabati_entity::section::{CreateSection, Section};
use maktabati_rag::Indexer;

use crate::context::RequestContext;

/// Manages sections and their cascading deletion.
#[derive(Debug, Clone)]
pub struct SectionService {
    section_repo: Arc<SectionRepository>,
    index_repo: Arc<IndexRecordRepository>,
    indexer: Arc<Indexer>,
}

impl SectionService {
    /// Creates a new section service.
    pub fn new(
        section_repo: Arc<SectionRepository>,
        index_repo: Arc<IndexRecordRepository>,
        indexer: Arc<Indexer>,
    ) -> Self {
        Self {
            section_repo,
            index_repo,
            indexer,
        }
    }

    /// List all of the user's sections.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Section>> {
        self.section_repo.find_all(ctx.user_id).await
    }

    /// Fetch one section.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Section> {
        self.section_repo
            .find_by_id(ctx.user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Section not found"))
    }

    /// Create a section.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: String,
        icon: Option<String>,
    ) -> AppResult<Section> {
        let section = self
            .section_repo
            .create(&CreateSection {
                owner_id: ctx.user_id,
                name,
                icon,
            })
            .await?;
        info!(section_id = %section.id, "Created section");
        Ok(section)
    }

    /// Rename a section.
    pub async fn rename(&self, ctx: &RequestContext, id: Uuid, name: &str) -> AppResult<Section> {
        self.section_repo.rename(ctx.user_id, id, name).await
    }

    /// Delete a section and everything it contains: folders, files,
    /// conversations, index records, and the document vectors backing them.
    ///
    /// Vector cleanup is best-effort; a vector-index failure must not leave
    /// the section half-deleted in the metadata store.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let records = self
            .index_repo
            .find_all_in_section(ctx.user_id, id)
            .await?;

        for record in &records {
            if let Err(error) = self.indexer.remove_document(&record.document_id).await {
                warn!(
                    section_id = %id,
                    document_id = %record.document_id,
                    %error,
                    "Failed to remove document vectors during section deletion"
                );
            }
        }

        let deleted = self.section_repo.delete_with_contents(ctx.user_id, id).await?;
        if !deleted {
            return Err(AppError::not_found("Section not found"));
        }

        info!(section_id = %id, index_records = records.len(), "Deleted section");
        Ok(())
    }
}
