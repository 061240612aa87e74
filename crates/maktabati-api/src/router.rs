//! Route definitions for the Maktabati HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes as usize;

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(section_routes())
        .merge(hierarchy_routes())
        .merge(folder_routes())
        .merge(file_routes())
        .merge(chat_routes())
        .merge(indexing_routes())
        .merge(search_routes())
        .merge(assistant_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn section_routes() -> Router<AppState> {
    Router::new()
        .route("/sections", get(handlers::section::list_sections))
        .route("/sections", post(handlers::section::create_section))
        .route("/sections/{id}", get(handlers::section::get_section))
        .route("/sections/{id}", put(handlers::section::rename_section))
        .route("/sections/{id}", delete(handlers::section::delete_section))
}

/// The materialized-tree endpoint keeps its flat query-parameter shape.
fn hierarchy_routes() -> Router<AppState> {
    Router::new().route(
        "/section-hierarchy",
        get(handlers::hierarchy::get_section_hierarchy),
    )
}

fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sections/{section_id}/folders",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route(
            "/sections/{section_id}/folders/{id}",
            get(handlers::folder::get_folder)
                .put(handlers::folder::rename_folder)
                .delete(handlers::folder::delete_folder),
        )
}

fn file_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sections/{section_id}/files",
            get(handlers::file::list_files).post(handlers::file::upload_file),
        )
        .route(
            "/sections/{section_id}/files/{id}",
            get(handlers::file::get_file)
                .put(handlers::file::update_file)
                .delete(handlers::file::delete_file),
        )
        .route(
            "/sections/{section_id}/files/{id}/favorite",
            put(handlers::file::set_favorite),
        )
        .route(
            "/sections/{section_id}/files/{id}/trash",
            post(handlers::file::trash_file),
        )
        .route(
            "/sections/{section_id}/files/{id}/restore",
            post(handlers::file::restore_file),
        )
        .route(
            "/sections/{section_id}/files/{id}/download",
            get(handlers::file::download_file),
        )
        .route("/files/starred", get(handlers::file::starred_files))
        .route("/files/recent", get(handlers::file::recent_files))
        .route("/files/trash", get(handlers::file::trashed_files))
}

fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/sections/{section_id}/query", post(handlers::chat::query))
        .route(
            "/sections/{section_id}/conversations",
            get(handlers::chat::list_conversations)
                .delete(handlers::chat::clear_conversations),
        )
        .route(
            "/sections/{section_id}/conversations/{id}",
            delete(handlers::chat::delete_conversation),
        )
}

fn indexing_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sections/{section_id}/index",
            get(handlers::indexing::list_index_records).post(handlers::indexing::index_file),
        )
        .route(
            "/sections/{section_id}/index/text",
            post(handlers::indexing::index_text),
        )
        .route(
            "/sections/{section_id}/index/{id}",
            delete(handlers::indexing::delete_index_record),
        )
}

fn search_routes() -> Router<AppState> {
    Router::new().route("/search", get(handlers::search::search_filenames))
}

fn assistant_routes() -> Router<AppState> {
    Router::new().route(
        "/sections/{section_id}/assist",
        post(handlers::assistant::assist),
    )
}
