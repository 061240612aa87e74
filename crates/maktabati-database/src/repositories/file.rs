//! File repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use maktabati_core::error::{AppError, ErrorKind};
use maktabati_core::result::AppResult;
use maktabati_entity::file::{CreateFile, File};

/// Repository for file-record CRUD and listings.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a file by owner, section, and ID.
    pub async fn find_by_id(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 AND section_id = $2 AND id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// List every file in a section, with no ordering assumed.
    ///
    /// The hierarchy materializer consumes this flat list.
    pub async fn find_all_in_section(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
    ) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE owner_id = $1 AND section_id = $2")
            .bind(owner_id)
            .bind(section_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// List files with the given containing folder (None for section roots).
    pub async fn find_by_folder(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        folder_id: Option<Uuid>,
    ) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 AND section_id = $2 \
             AND folder_id IS NOT DISTINCT FROM $3 AND NOT deleted ORDER BY name ASC",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list files by folder", e)
        })
    }

    /// Fetch a batch of files by ID across all of an owner's sections.
    pub async fn find_by_ids(&self, owner_id: Uuid, ids: &[Uuid]) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 AND id = ANY($2) AND NOT deleted",
        )
        .bind(owner_id)
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch files by ID", e))
    }

    /// List starred (favorite) files across all of an owner's sections.
    pub async fn find_starred(&self, owner_id: Uuid) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 AND favorite AND NOT deleted \
             ORDER BY updated_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list starred files", e))
    }

    /// List the most recently added files across all of an owner's sections.
    pub async fn find_recent(&self, owner_id: Uuid, limit: i64) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 AND NOT deleted \
             ORDER BY created_at DESC LIMIT $2",
        )
        .bind(owner_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list recent files", e))
    }

    /// List soft-deleted files (the trash) across all of an owner's sections.
    pub async fn find_deleted(&self, owner_id: Uuid) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 AND deleted ORDER BY updated_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list deleted files", e))
    }

    /// Create a new file record.
    pub async fn create(&self, data: &CreateFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "INSERT INTO files \
             (owner_id, section_id, name, file_url, file_type, file_size, folder_id, storage_path) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.section_id)
        .bind(&data.name)
        .bind(&data.file_url)
        .bind(&data.file_type)
        .bind(data.file_size)
        .bind(data.folder_id)
        .bind(&data.storage_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file record", e))
    }

    /// Rename a file and optionally move it to another folder.
    pub async fn update(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        id: Uuid,
        new_name: &str,
        new_folder_id: Option<Option<Uuid>>,
    ) -> AppResult<File> {
        // Outer None leaves folder_id untouched; Some(None) moves to root.
        let file = match new_folder_id {
            Some(folder_id) => {
                sqlx::query_as::<_, File>(
                    "UPDATE files SET name = $4, folder_id = $5, updated_at = NOW() \
                     WHERE owner_id = $1 AND section_id = $2 AND id = $3 RETURNING *",
                )
                .bind(owner_id)
                .bind(section_id)
                .bind(id)
                .bind(new_name)
                .bind(folder_id)
                .fetch_optional(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, File>(
                    "UPDATE files SET name = $4, updated_at = NOW() \
                     WHERE owner_id = $1 AND section_id = $2 AND id = $3 RETURNING *",
                )
                .bind(owner_id)
                .bind(section_id)
                .bind(id)
                .bind(new_name)
                .fetch_optional(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update file", e))?;

        file.ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Set or clear the favorite flag.
    pub async fn set_favorite(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        id: Uuid,
        favorite: bool,
    ) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "UPDATE files SET favorite = $4, updated_at = NOW() \
             WHERE owner_id = $1 AND section_id = $2 AND id = $3 RETURNING *",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .bind(favorite)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set favorite", e))?
        .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Soft-delete a file (move to trash) or restore it.
    pub async fn set_deleted(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        id: Uuid,
        deleted: bool,
    ) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "UPDATE files SET deleted = $4, updated_at = NOW() \
             WHERE owner_id = $1 AND section_id = $2 AND id = $3 RETURNING *",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .bind(deleted)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set deleted flag", e))?
        .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Mark a file as indexed for retrieval.
    pub async fn mark_indexed(&self, owner_id: Uuid, section_id: Uuid, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE files SET indexed = TRUE, updated_at = NOW() \
             WHERE owner_id = $1 AND section_id = $2 AND id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark file indexed", e))?;
        Ok(())
    }

    /// Permanently delete a file record.
    pub async fn delete(&self, owner_id: Uuid, section_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM files WHERE owner_id = $1 AND section_id = $2 AND id = $3")
                .bind(owner_id)
                .bind(section_id)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete file", e)
                })?;
        Ok(result.rows_affected() > 0)
    }
}
