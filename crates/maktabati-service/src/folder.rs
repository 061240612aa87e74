//! Folder lifecycle within a section.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use maktabati_core::error::AppError;
use maktabati_core::result::AppResult;
use maktabati_database::repositories::folder::FolderRepository;
use maktabati_entity::folder::{CreateFolder, Folder};

use crate::context::RequestContext;

/// Manages folders.
#[derive(Debug, Clone)]
pub struct FolderService {
    folder_repo: Arc<FolderRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// List folders directly under a parent (None for section roots).
    pub async fn list(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> AppResult<Vec<Folder>> {
        self.folder_repo
            .find_by_parent(ctx.user_id, section_id, parent_id)
            .await
    }

    /// Fetch one folder.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<Folder> {
        self.folder_repo
            .find_by_id(ctx.user_id, section_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Create a folder, optionally nested under an existing parent.
    ///
    /// The parent must exist at creation time; dangling references are
    /// tolerated only when read back, never written.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        name: String,
        parent_id: Option<Uuid>,
    ) -> AppResult<Folder> {
        if let Some(parent_id) = parent_id {
            self.folder_repo
                .find_by_id(ctx.user_id, section_id, parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
        }

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                owner_id: ctx.user_id,
                section_id,
                name,
                parent_id,
            })
            .await?;
        info!(folder_id = %folder.id, %section_id, "Created folder");
        Ok(folder)
    }

    /// Rename a folder.
    pub async fn rename(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        id: Uuid,
        name: &str,
    ) -> AppResult<Folder> {
        self.folder_repo
            .rename(ctx.user_id, section_id, id, name)
            .await
    }

    /// Delete a folder and its files: soft by default, permanent on request.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        id: Uuid,
        permanent: bool,
    ) -> AppResult<()> {
        self.folder_repo
            .find_by_id(ctx.user_id, section_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        if permanent {
            self.folder_repo
                .hard_delete_with_files(ctx.user_id, section_id, id)
                .await?;
        } else {
            self.folder_repo
                .soft_delete_with_files(ctx.user_id, section_id, id)
                .await?;
        }
        info!(folder_id = %id, %section_id, permanent, "Deleted folder");
        Ok(())
    }
}
