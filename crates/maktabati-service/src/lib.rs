//! # maktabati-service
//!
//! Business logic service layer for Maktabati. Each service orchestrates
//! repositories, blob storage, and the RAG pipeline to implement
//! application-level use cases.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod assistant;
pub mod chat;
pub mod context;
pub mod file;
pub mod folder;
pub mod hierarchy;
pub mod indexing;
pub mod search;
pub mod section;

pub use assistant::AssistantService;
pub use chat::ChatService;
pub use context::RequestContext;
pub use file::FileService;
pub use folder::FolderService;
pub use hierarchy::HierarchyService;
pub use indexing::IndexingService;
pub use search::SearchService;
pub use section::SectionService;
