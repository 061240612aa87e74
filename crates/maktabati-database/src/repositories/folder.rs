//! Folder repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use maktabati_core::error::{AppError, ErrorKind};
use maktabati_core::result::AppResult;
use maktabati_entity::folder::{CreateFolder, Folder};

/// Repository for folder CRUD and flat per-section listing.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a folder by owner, section, and ID.
    pub async fn find_by_id(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = $1 AND section_id = $2 AND id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// List every folder in a section, with no ordering assumed.
    ///
    /// The hierarchy materializer consumes this flat list.
    pub async fn find_all_in_section(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
    ) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = $1 AND section_id = $2",
        )
        .bind(owner_id)
        .bind(section_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// List folders with the given parent (None for section roots).
    pub async fn find_by_parent(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = $1 AND section_id = $2 \
             AND parent_id IS NOT DISTINCT FROM $3 ORDER BY name ASC",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list folders by parent", e)
        })
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (owner_id, section_id, name, parent_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.section_id)
        .bind(&data.name)
        .bind(data.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))
    }

    /// Rename a folder.
    pub async fn rename(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        id: Uuid,
        new_name: &str,
    ) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = $4, updated_at = NOW() \
             WHERE owner_id = $1 AND section_id = $2 AND id = $3 RETURNING *",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .bind(new_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename folder", e))?
        .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Soft-delete a folder and every file it contains.
    pub async fn soft_delete_with_files(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "UPDATE folders SET deleted = TRUE, updated_at = NOW() \
             WHERE owner_id = $1 AND section_id = $2 AND id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to soft-delete folder", e))?;

        sqlx::query(
            "UPDATE files SET deleted = TRUE, updated_at = NOW() \
             WHERE owner_id = $1 AND section_id = $2 AND folder_id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to soft-delete folder files", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit folder deletion", e)
        })?;

        Ok(())
    }

    /// Permanently delete a folder and every file it contains.
    pub async fn hard_delete_with_files(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "DELETE FROM files WHERE owner_id = $1 AND section_id = $2 AND folder_id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete folder files", e)
        })?;

        sqlx::query("DELETE FROM folders WHERE owner_id = $1 AND section_id = $2 AND id = $3")
            .bind(owner_id)
            .bind(section_id)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit folder deletion", e)
        })?;

        Ok(())
    }
}
