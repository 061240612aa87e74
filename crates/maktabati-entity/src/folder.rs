//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A folder within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// The section this folder belongs to.
    pub section_id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for section-root folders).
    pub parent_id: Option<Uuid>,
    /// Whether the folder has been soft-deleted.
    pub deleted: bool,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this folder sits at the section root (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolder {
    /// The owning user.
    pub owner_id: Uuid,
    /// The section this folder belongs to.
    pub section_id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder (None for section root).
    pub parent_id: Option<Uuid>,
}
