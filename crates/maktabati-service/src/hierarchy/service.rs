//! Fetches a section's flat records and materializes the nested tree.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use maktabati_core::error::AppError;
use maktabati_core::result::AppResult;
use maktabati_database::repositories::file::FileRepository;
use maktabati_database::repositories::folder::FolderRepository;
use maktabati_database::repositories::section::SectionRepository;
use maktabati_entity::hierarchy::HierarchyResult;

use crate::context::RequestContext;
use crate::hierarchy::builder::materialize;

/// Produces the materialized hierarchy for a section.
#[derive(Debug, Clone)]
pub struct HierarchyService {
    section_repo: Arc<SectionRepository>,
    folder_repo: Arc<FolderRepository>,
    file_repo: Arc<FileRepository>,
}

impl HierarchyService {
    /// Creates a new hierarchy service.
    pub fn new(
        section_repo: Arc<SectionRepository>,
        folder_repo: Arc<FolderRepository>,
        file_repo: Arc<FileRepository>,
    ) -> Self {
        Self {
            section_repo,
            folder_repo,
            file_repo,
        }
    }

    /// Build the nested hierarchy for one section.
    ///
    /// The tree is ephemeral and recomputed on every request. Soft-deleted
    /// folders and files are excluded before materialization.
    pub async fn get_hierarchy(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
    ) -> AppResult<HierarchyResult> {
        let section = self
            .section_repo
            .find_by_id(ctx.user_id, section_id)
            .await?
            .ok_or_else(|| AppError::not_found("Section not found"))?;

        let folders: Vec<_> = self
            .folder_repo
            .find_all_in_section(ctx.user_id, section_id)
            .await?
            .into_iter()
            .filter(|f| !f.deleted)
            .collect();

        let files: Vec<_> = self
            .file_repo
            .find_all_in_section(ctx.user_id, section_id)
            .await?
            .into_iter()
            .filter(|f| !f.deleted)
            .collect();

        debug!(
            %section_id,
            folders = folders.len(),
            files = files.len(),
            "Materializing section hierarchy"
        );

        Ok(materialize(section, folders, files))
    }
}
