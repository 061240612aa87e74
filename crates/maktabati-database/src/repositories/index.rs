//! Index-record repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use maktabati_core::error::{AppError, ErrorKind};
use maktabati_core::result::AppResult;
use maktabati_entity::index::IndexRecord;

/// Repository for vector-index bookkeeping records.
#[derive(Debug, Clone)]
pub struct IndexRecordRepository {
    pool: PgPool,
}

impl IndexRecordRepository {
    /// Create a new index-record repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a record by owner, section, and ID.
    pub async fn find_by_id(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        id: Uuid,
    ) -> AppResult<Option<IndexRecord>> {
        sqlx::query_as::<_, IndexRecord>(
            "SELECT * FROM index_records WHERE owner_id = $1 AND section_id = $2 AND id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find index record", e))
    }

    /// List records for a section, newest first.
    pub async fn find_all_in_section(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
    ) -> AppResult<Vec<IndexRecord>> {
        sqlx::query_as::<_, IndexRecord>(
            "SELECT * FROM index_records WHERE owner_id = $1 AND section_id = $2 \
             ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .bind(section_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list index records", e))
    }

    /// Delete every record bookkeeping a given document.
    pub async fn delete_by_document(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        document_id: &str,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM index_records \
             WHERE owner_id = $1 AND section_id = $2 AND document_id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(document_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete index records", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Create a new record.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        document_id: &str,
        document_name: &str,
        document_type: &str,
        total_chunks: i32,
        successful: i32,
    ) -> AppResult<IndexRecord> {
        sqlx::query_as::<_, IndexRecord>(
            "INSERT INTO index_records \
             (owner_id, section_id, document_id, document_name, document_type, total_chunks, successful) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(document_id)
        .bind(document_name)
        .bind(document_type)
        .bind(total_chunks)
        .bind(successful)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create index record", e))
    }

    /// Delete a record.
    pub async fn delete(&self, owner_id: Uuid, section_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM index_records WHERE owner_id = $1 AND section_id = $2 AND id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete index record", e)
        })?;
        Ok(result.rows_affected() > 0)
    }
}
