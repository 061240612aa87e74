//! Index-record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Bookkeeping row for a document that was indexed into the vector store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct IndexRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// The section the document belongs to.
    pub section_id: Uuid,
    /// The indexed document's ID (file ID, or a generated text-document ID).
    pub document_id: String,
    /// Human-readable document name.
    pub document_name: String,
    /// MIME type of the document.
    pub document_type: String,
    /// Number of chunks produced for the document.
    pub total_chunks: i32,
    /// Number of chunks successfully upserted into the vector index.
    pub successful: i32,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}
