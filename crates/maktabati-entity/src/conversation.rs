//! Conversation entity and chat-message threading types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One stored chat turn: the user's query and the assistant's response,
/// with the retrieval hits that backed the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique turn identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// The section this conversation belongs to.
    pub section_id: Uuid,
    /// The user's query.
    pub query: String,
    /// The assistant's response.
    pub response: String,
    /// Retrieval hits attached to the response.
    #[sqlx(json)]
    pub sources: Vec<SourceRef>,
    /// When the turn was recorded.
    pub timestamp: DateTime<Utc>,
}

/// A retrieval hit: a vector-index match that contributed context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    /// Vector ID of the matched chunk.
    pub id: String,
    /// Similarity score.
    pub score: f32,
    /// Chunk metadata as stored in the vector index.
    pub metadata: serde_json::Value,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The end user.
    User,
    /// The assistant.
    Assistant,
}

/// A logical chat message, derived from stored turns for prompt assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
    /// Retrieval hits (assistant messages only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
}

impl ChatMessage {
    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    /// An assistant message with its sources.
    pub fn assistant(content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            sources,
        }
    }
}
