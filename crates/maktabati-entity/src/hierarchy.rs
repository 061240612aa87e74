//! Derived hierarchy types for the section tree.
//!
//! These are ephemeral: recomputed on every request, never persisted, and
//! carry no identity beyond the records they wrap.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::file::File;
use crate::folder::Folder;
use crate::section::Section;

/// A folder node in the materialized hierarchy: the folder record plus its
/// nested children and ancestry path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    /// The underlying folder record.
    #[serde(flatten)]
    pub folder: Folder,
    /// Child folders, sorted by name.
    pub folders: Vec<HierarchyNode>,
    /// Files directly contained in this folder, sorted by name.
    pub files: Vec<FileNode>,
    /// Ancestor IDs from the section down to and including this folder.
    pub path: Vec<Uuid>,
}

/// A file in the materialized hierarchy: the file record plus its
/// ancestry path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    /// The underlying file record.
    #[serde(flatten)]
    pub file: File,
    /// Ancestor IDs from the section down to the containing folder
    /// (just `[section_id]` for section-root files).
    pub path: Vec<Uuid>,
}

/// The section with its root folders and files attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHierarchy {
    /// The underlying section record.
    #[serde(flatten)]
    pub section: Section,
    /// Root-level folders, sorted by name.
    pub folders: Vec<HierarchyNode>,
    /// Root-level files, sorted by name.
    pub files: Vec<FileNode>,
}

/// Aggregate counts over the materialized hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyCounts {
    /// All folders in the section, at any depth.
    pub total_folders: u64,
    /// All files visible in the tree (orphaned files are excluded).
    pub total_files: u64,
}

/// The complete materialized hierarchy returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyResult {
    /// The nested section tree.
    pub section: SectionHierarchy,
    /// Aggregate counts.
    pub counts: HierarchyCounts,
}
