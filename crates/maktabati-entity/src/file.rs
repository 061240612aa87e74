//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A file record within a section. The binary content lives in blob
/// storage; this row holds only metadata and the public URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// The section this file belongs to.
    pub section_id: Uuid,
    /// File name.
    pub name: String,
    /// Public URL of the stored blob.
    pub file_url: String,
    /// MIME type.
    pub file_type: String,
    /// Size in bytes.
    pub file_size: i64,
    /// Containing folder ID (null for section-root files).
    pub folder_id: Option<Uuid>,
    /// Storage key of the blob, when this server stored it.
    pub storage_path: Option<String>,
    /// Whether the user starred this file.
    pub favorite: bool,
    /// Whether the file has been soft-deleted (in trash).
    pub deleted: bool,
    /// Whether the file content has been indexed for retrieval.
    pub indexed: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFile {
    /// The owning user.
    pub owner_id: Uuid,
    /// The section this file belongs to.
    pub section_id: Uuid,
    /// File name.
    pub name: String,
    /// Public URL of the stored blob.
    pub file_url: String,
    /// MIME type.
    pub file_type: String,
    /// Size in bytes.
    pub file_size: i64,
    /// Containing folder (None for section root).
    pub folder_id: Option<Uuid>,
    /// Storage key of the blob, when this server stored it.
    pub storage_path: Option<String>,
}
