//! File lifecycle: upload, listing views, trash, and permanent deletion.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use maktabati_core::error::AppError;
use maktabati_core::result::AppResult;
use maktabati_database::repositories::file::FileRepository;
use maktabati_database::repositories::folder::FolderRepository;
use maktabati_database::repositories::index::IndexRecordRepository;
use maktabati_entity::file::{CreateFile, File};
use maktabati_rag::Indexer;
use maktabati_storage::StorageManager;

use crate::context::RequestContext;

/// Manages file records and their backing blobs.
#[derive(Debug, Clone)]
pub struct FileService {
    file_repo: Arc<FileRepository>,
    folder_repo: Arc<FolderRepository>,
    index_repo: Arc<IndexRecordRepository>,
    storage: Arc<StorageManager>,
    indexer: Arc<Indexer>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        folder_repo: Arc<FolderRepository>,
        index_repo: Arc<IndexRecordRepository>,
        storage: Arc<StorageManager>,
        indexer: Arc<Indexer>,
    ) -> Self {
        Self {
            file_repo,
            folder_repo,
            index_repo,
            storage,
            indexer,
        }
    }

    /// List files directly under a folder (None for section roots).
    pub async fn list(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        folder_id: Option<Uuid>,
    ) -> AppResult<Vec<File>> {
        self.file_repo
            .find_by_folder(ctx.user_id, section_id, folder_id)
            .await
    }

    /// Fetch one file.
    pub async fn get(&self, ctx: &RequestContext, section_id: Uuid, id: Uuid) -> AppResult<File> {
        self.file_repo
            .find_by_id(ctx.user_id, section_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Upload a file: write the blob, then create the metadata record.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        folder_id: Option<Uuid>,
        name: String,
        content_type: String,
        data: Bytes,
    ) -> AppResult<File> {
        if name.trim().is_empty() {
            return Err(AppError::validation("File name must not be empty"));
        }
        if let Some(folder_id) = folder_id {
            self.folder_repo
                .find_by_id(ctx.user_id, section_id, folder_id)
                .await?
                .ok_or_else(|| AppError::not_found("Folder not found"))?;
        }

        let key = self.storage.object_key(ctx.user_id, section_id, &name);
        let size = data.len() as i64;
        self.storage.put(&key, data, &content_type).await?;

        let file = self
            .file_repo
            .create(&CreateFile {
                owner_id: ctx.user_id,
                section_id,
                name,
                file_url: self.storage.public_url(&key),
                file_type: content_type,
                file_size: size,
                folder_id,
                storage_path: Some(key),
            })
            .await?;

        info!(file_id = %file.id, %section_id, size, "Uploaded file");
        Ok(file)
    }

    /// Rename a file and optionally move it to another folder.
    ///
    /// `new_folder_id` is three-valued: outer `None` leaves the location
    /// untouched, `Some(None)` moves the file to the section root.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        id: Uuid,
        new_name: &str,
        new_folder_id: Option<Option<Uuid>>,
    ) -> AppResult<File> {
        if let Some(Some(folder_id)) = new_folder_id {
            self.folder_repo
                .find_by_id(ctx.user_id, section_id, folder_id)
                .await?
                .ok_or_else(|| AppError::not_found("Destination folder not found"))?;
        }
        self.file_repo
            .update(ctx.user_id, section_id, id, new_name, new_folder_id)
            .await
    }

    /// Set or clear the favorite star.
    pub async fn set_favorite(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        id: Uuid,
        favorite: bool,
    ) -> AppResult<File> {
        self.file_repo
            .set_favorite(ctx.user_id, section_id, id, favorite)
            .await
    }

    /// Move a file to the trash.
    pub async fn soft_delete(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<File> {
        self.file_repo
            .set_deleted(ctx.user_id, section_id, id, true)
            .await
    }

    /// Restore a file from the trash.
    pub async fn restore(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<File> {
        self.file_repo
            .set_deleted(ctx.user_id, section_id, id, false)
            .await
    }

    /// Permanently delete a file: blob, vectors, index records, and the
    /// metadata record.
    ///
    /// Blob and vector cleanup are best-effort; the metadata record is
    /// removed regardless so the file disappears for the user.
    pub async fn delete(&self, ctx: &RequestContext, section_id: Uuid, id: Uuid) -> AppResult<()> {
        let file = self.get(ctx, section_id, id).await?;

        if let Some(key) = &file.storage_path {
            if let Err(error) = self.storage.delete(key).await {
                warn!(file_id = %id, key, %error, "Failed to delete file blob");
            }
        }

        if file.indexed {
            let document_id = id.to_string();
            if let Err(error) = self.indexer.remove_document(&document_id).await {
                warn!(file_id = %id, %error, "Failed to remove file vectors");
            }
            self.index_repo
                .delete_by_document(ctx.user_id, section_id, &document_id)
                .await?;
        }

        self.file_repo.delete(ctx.user_id, section_id, id).await?;
        info!(file_id = %id, %section_id, "Permanently deleted file");
        Ok(())
    }

    /// Read a file's blob content.
    pub async fn download(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<(File, Bytes)> {
        let file = self.get(ctx, section_id, id).await?;
        let key = file
            .storage_path
            .clone()
            .ok_or_else(|| AppError::not_found("File has no stored content"))?;
        let data = self.storage.get(&key).await?;
        Ok((file, data))
    }

    /// List starred files across all of the user's sections.
    pub async fn starred(&self, ctx: &RequestContext) -> AppResult<Vec<File>> {
        self.file_repo.find_starred(ctx.user_id).await
    }

    /// List the most recently updated files across all sections.
    pub async fn recent(&self, ctx: &RequestContext, limit: i64) -> AppResult<Vec<File>> {
        self.file_repo.find_recent(ctx.user_id, limit).await
    }

    /// List trashed files across all sections.
    pub async fn trash(&self, ctx: &RequestContext) -> AppResult<Vec<File>> {
        self.file_repo.find_deleted(ctx.user_id).await
    }
}
