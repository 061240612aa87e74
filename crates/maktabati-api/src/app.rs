//! Application builder: wires repositories, services, router, and
//! middleware into a running Axum server.

use std::sync::Arc;

use sqlx::PgPool;

use maktabati_core::config::AppConfig;
use maktabati_core::error::AppError;
use maktabati_database::repositories::conversation::ConversationRepository;
use maktabati_database::repositories::file::FileRepository;
use maktabati_database::repositories::folder::FolderRepository;
use maktabati_database::repositories::index::IndexRecordRepository;
use maktabati_database::repositories::section::SectionRepository;
use maktabati_rag::{GeminiClient, Indexer, PineconeClient, QueryPipeline};

use crate::router::build_router;
use crate::state::AppState;

/// Runs the Maktabati server with the given configuration and database
/// pool. Blocks until shutdown.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let state = build_state(config, db_pool).await?;
    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Maktabati server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Constructs the full dependency graph behind `AppState`.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let config = Arc::new(config);

    // ── Storage ──────────────────────────────────────────────────
    let storage_manager = Arc::new(
        maktabati_storage::StorageManager::new(&config.storage).await?,
    );

    // ── Auth ─────────────────────────────────────────────────────
    let jwt_decoder = Arc::new(maktabati_auth::JwtDecoder::new(&config.auth));

    // ── RAG clients ──────────────────────────────────────────────
    let gemini = GeminiClient::new(&config.rag)?;
    let pinecone = PineconeClient::new(&config.rag)?;
    let indexer = Arc::new(Indexer::new(gemini.clone(), pinecone.clone(), &config.rag));
    let pipeline = Arc::new(QueryPipeline::new(
        gemini.clone(),
        pinecone.clone(),
        &config.rag,
    ));
    let gemini = Arc::new(gemini);
    let pinecone = Arc::new(pinecone);

    // ── Repositories ─────────────────────────────────────────────
    let section_repo = Arc::new(SectionRepository::new(db_pool.clone()));
    let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
    let file_repo = Arc::new(FileRepository::new(db_pool.clone()));
    let conversation_repo = Arc::new(ConversationRepository::new(db_pool.clone()));
    let index_repo = Arc::new(IndexRecordRepository::new(db_pool.clone()));

    // ── Services ─────────────────────────────────────────────────
    let section_service = Arc::new(maktabati_service::SectionService::new(
        Arc::clone(&section_repo),
        Arc::clone(&index_repo),
        Arc::clone(&indexer),
    ));
    let folder_service = Arc::new(maktabati_service::FolderService::new(Arc::clone(
        &folder_repo,
    )));
    let file_service = Arc::new(maktabati_service::FileService::new(
        Arc::clone(&file_repo),
        Arc::clone(&folder_repo),
        Arc::clone(&index_repo),
        Arc::clone(&storage_manager),
        Arc::clone(&indexer),
    ));
    let hierarchy_service = Arc::new(maktabati_service::HierarchyService::new(
        Arc::clone(&section_repo),
        Arc::clone(&folder_repo),
        Arc::clone(&file_repo),
    ));
    let chat_service = Arc::new(maktabati_service::ChatService::new(
        Arc::clone(&section_repo),
        Arc::clone(&conversation_repo),
        Arc::clone(&pipeline),
        config.rag.history_limit,
    ));
    let indexing_service = Arc::new(maktabati_service::IndexingService::new(
        Arc::clone(&file_repo),
        Arc::clone(&index_repo),
        Arc::clone(&storage_manager),
        Arc::clone(&indexer),
    ));
    let search_service = Arc::new(maktabati_service::SearchService::new(
        Arc::clone(&file_repo),
        Arc::clone(&gemini),
        Arc::clone(&pinecone),
        config.rag.top_k,
    ));
    let assistant_service = Arc::new(maktabati_service::AssistantService::new(
        Arc::clone(&file_repo),
        Arc::clone(&storage_manager),
        Arc::clone(&gemini),
    ));

    Ok(AppState {
        config,
        db_pool,
        storage_manager,
        jwt_decoder,
        section_service,
        folder_service,
        file_service,
        hierarchy_service,
        chat_service,
        indexing_service,
        search_service,
        assistant_service,
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
    }
}
