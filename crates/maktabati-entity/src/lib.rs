//! # maktabati-entity
//!
//! Domain entity models for Maktabati. Every struct in this crate
//! represents a database table row or a derived value object. Database
//! entities derive `sqlx::FromRow`; everything serializes camelCase to
//! match the client wire contract.

pub mod conversation;
pub mod file;
pub mod folder;
pub mod hierarchy;
pub mod index;
pub mod section;

pub use conversation::{ChatMessage, ChatRole, Conversation, SourceRef};
pub use file::File;
pub use folder::Folder;
pub use hierarchy::{FileNode, HierarchyCounts, HierarchyNode, HierarchyResult, SectionHierarchy};
pub use index::IndexRecord;
pub use section::Section;
