//! Section repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use maktabati_core::error::{AppError, ErrorKind};
use maktabati_core::result::AppResult;
use maktabati_entity::section::{CreateSection, Section};

/// Repository for section CRUD.
#[derive(Debug, Clone)]
pub struct SectionRepository {
    pool: PgPool,
}

impl SectionRepository {
    /// Create a new section repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a section by owner and ID.
    pub async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> AppResult<Option<Section>> {
        sqlx::query_as::<_, Section>("SELECT * FROM sections WHERE owner_id = $1 AND id = $2")
            .bind(owner_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find section", e))
    }

    /// List all sections for an owner.
    pub async fn find_all(&self, owner_id: Uuid) -> AppResult<Vec<Section>> {
        sqlx::query_as::<_, Section>(
            "SELECT * FROM sections WHERE owner_id = $1 ORDER BY created_at ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sections", e))
    }

    /// Create a new section.
    pub async fn create(&self, data: &CreateSection) -> AppResult<Section> {
        sqlx::query_as::<_, Section>(
            "INSERT INTO sections (owner_id, name, icon) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.icon)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create section", e))
    }

    /// Rename a section.
    pub async fn rename(&self, owner_id: Uuid, id: Uuid, new_name: &str) -> AppResult<Section> {
        sqlx::query_as::<_, Section>(
            "UPDATE sections SET name = $3, updated_at = NOW() \
             WHERE owner_id = $1 AND id = $2 RETURNING *",
        )
        .bind(owner_id)
        .bind(id)
        .bind(new_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename section", e))?
        .ok_or_else(|| AppError::not_found("Section not found"))
    }

    /// Delete a section together with all of its folders, files,
    /// conversations, and index records in one transaction.
    pub async fn delete_with_contents(&self, owner_id: Uuid, id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for table in ["files", "folders", "conversations", "index_records"] {
            sqlx::query(&format!(
                "DELETE FROM {table} WHERE owner_id = $1 AND section_id = $2"
            ))
            .bind(owner_id)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete section contents", e)
            })?;
        }

        let result = sqlx::query("DELETE FROM sections WHERE owner_id = $1 AND id = $2")
            .bind(owner_id)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete section", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit section deletion", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
