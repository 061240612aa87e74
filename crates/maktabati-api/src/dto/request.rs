//! Request DTOs with validation.
//!
//! The wire format is camelCase throughout, matching the entity layer.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Deserializes a field that distinguishes "absent" from "explicitly
/// null": absent leaves the outer `Option` as `None`, `null` yields
/// `Some(None)`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Uuid>::deserialize(deserializer).map(Some)
}

/// Create section request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionRequest {
    /// Section name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Optional icon identifier.
    pub icon: Option<String>,
}

/// Rename request body, shared by sections, folders, and files.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    /// New name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
}

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Parent folder, or null for a section root.
    pub parent_id: Option<Uuid>,
}

/// Folder listing query parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderListQuery {
    /// Parent folder, or absent for section roots.
    pub parent_id: Option<Uuid>,
}

/// Folder deletion query parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFolderQuery {
    /// Permanently delete instead of moving to trash.
    #[serde(default)]
    pub permanent: bool,
}

/// File listing query parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListQuery {
    /// Containing folder, or absent for section-root files.
    pub folder_id: Option<Uuid>,
}

/// Update file request body: rename and/or move.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFileRequest {
    /// New name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Destination folder: absent leaves the location untouched, null
    /// moves the file to the section root.
    #[serde(default, deserialize_with = "double_option")]
    pub folder_id: Option<Option<Uuid>>,
}

/// Favorite toggle request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    /// New favorite state.
    pub favorite: bool,
}

/// Recent-files query parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFilesQuery {
    /// Maximum number of files returned.
    #[serde(default = "default_recent_limit")]
    pub limit: i64,
}

fn default_recent_limit() -> i64 {
    10
}

/// Section hierarchy query parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyQuery {
    /// The section to materialize.
    pub section_id: Option<Uuid>,
}

/// Chat query request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatQueryRequest {
    /// The user's question.
    #[validate(length(min = 1, message = "Query is required"))]
    pub query: String,
    /// Number of chunks to retrieve (server default when absent).
    pub top_k: Option<usize>,
    /// Skip retrieval and answer from history alone.
    #[serde(default)]
    pub direct: bool,
}

/// Conversation listing query parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationQuery {
    /// Maximum number of turns returned.
    #[serde(default = "default_conversation_limit")]
    pub limit: i64,
}

fn default_conversation_limit() -> i64 {
    50
}

/// Index-a-stored-file request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexFileRequest {
    /// The stored file to index.
    pub file_id: Uuid,
}

/// Index-raw-text request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IndexTextRequest {
    /// Display name for the document.
    #[validate(length(min = 1, max = 255, message = "Document name is required"))]
    pub document_name: String,
    /// The text to index.
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Filename search query parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Free-text description of the file being looked for.
    pub query: String,
}

/// Writing assistant request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssistRequest {
    /// Source files to ground the output in (at most three).
    pub file_ids: Vec<Uuid>,
    /// What to write.
    #[validate(length(min = 1, message = "Instruction is required"))]
    pub instruction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_file_distinguishes_absent_from_null() {
        let absent: UpdateFileRequest = serde_json::from_str(r#"{"name":"a"}"#).unwrap();
        assert_eq!(absent.folder_id, None);

        let null: UpdateFileRequest =
            serde_json::from_str(r#"{"name":"a","folderId":null}"#).unwrap();
        assert_eq!(null.folder_id, Some(None));

        let id = Uuid::new_v4();
        let set: UpdateFileRequest =
            serde_json::from_str(&format!(r#"{{"name":"a","folderId":"{id}"}}"#)).unwrap();
        assert_eq!(set.folder_id, Some(Some(id)));
    }

    #[test]
    fn test_recent_files_limit_defaults_to_ten() {
        let query: RecentFilesQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, 10);

        let query: RecentFilesQuery = serde_json::from_str(r#"{"limit":3}"#).unwrap();
        assert_eq!(query.limit, 3);
    }
}
