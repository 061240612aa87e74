//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use maktabati_auth::jwt::decoder::JwtDecoder;
use maktabati_core::config::AppConfig;
use maktabati_storage::StorageManager;

use maktabati_service::{
    AssistantService, ChatService, FileService, FolderService, HierarchyService, IndexingService,
    SearchService, SectionService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Blob storage manager.
    pub storage_manager: Arc<StorageManager>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Section CRUD and cascading deletion.
    pub section_service: Arc<SectionService>,
    /// Folder CRUD.
    pub folder_service: Arc<FolderService>,
    /// File CRUD, upload, and trash.
    pub file_service: Arc<FileService>,
    /// Section hierarchy materialization.
    pub hierarchy_service: Arc<HierarchyService>,
    /// Retrieval-augmented chat.
    pub chat_service: Arc<ChatService>,
    /// Document indexing.
    pub indexing_service: Arc<IndexingService>,
    /// Semantic filename search.
    pub search_service: Arc<SearchService>,
    /// Writing assistant.
    pub assistant_service: Arc<AssistantService>,
}
