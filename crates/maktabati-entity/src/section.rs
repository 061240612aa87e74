//! Section entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A section: the top-level container owning a disjoint set of folders
/// and files, analogous to a root drive or workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique section identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// Section name.
    pub name: String,
    /// Optional display icon.
    pub icon: Option<String>,
    /// When the section was created.
    pub created_at: DateTime<Utc>,
    /// When the section was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSection {
    /// The owning user.
    pub owner_id: Uuid,
    /// Section name.
    pub name: String,
    /// Optional display icon.
    pub icon: Option<String>,
}
