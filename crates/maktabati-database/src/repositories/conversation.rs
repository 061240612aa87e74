//! Conversation repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use maktabati_core::error::{AppError, ErrorKind};
use maktabati_core::result::AppResult;
use maktabati_entity::conversation::{Conversation, SourceRef};

/// Repository for stored chat turns.
#[derive(Debug, Clone)]
pub struct ConversationRepository {
    pool: PgPool,
}

impl ConversationRepository {
    /// Create a new conversation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the newest `limit` turns for a section, newest first.
    ///
    /// Callers that need chronological order reverse the result once
    /// client-side; querying descending is what makes `limit` return the
    /// *latest* turns.
    pub async fn find_recent(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<Conversation>> {
        sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversations WHERE owner_id = $1 AND section_id = $2 \
             ORDER BY timestamp DESC LIMIT $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list conversations", e))
    }

    /// Record a new chat turn.
    pub async fn create(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        query: &str,
        response: &str,
        sources: &[SourceRef],
    ) -> AppResult<Conversation> {
        let sources_json = serde_json::to_value(sources)?;
        sqlx::query_as::<_, Conversation>(
            "INSERT INTO conversations (owner_id, section_id, query, response, sources) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(query)
        .bind(response)
        .bind(sources_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record conversation", e))
    }

    /// Delete one turn.
    pub async fn delete(&self, owner_id: Uuid, section_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM conversations WHERE owner_id = $1 AND section_id = $2 AND id = $3",
        )
        .bind(owner_id)
        .bind(section_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete conversation", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every turn for a section, returning how many were removed.
    pub async fn delete_all(&self, owner_id: Uuid, section_id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM conversations WHERE owner_id = $1 AND section_id = $2")
                .bind(owner_id)
                .bind(section_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to clear conversations", e)
                })?;
        Ok(result.rows_affected())
    }
}
