//! Document indexing handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use maktabati_core::error::AppError;

use crate::dto::request::{IndexFileRequest, IndexTextRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/sections/{section_id}/index
pub async fn list_index_records(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let records = state.indexing_service.list(&auth, section_id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": records })))
}

/// POST /api/sections/{section_id}/index: index a stored file.
pub async fn index_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
    Json(req): Json<IndexFileRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let record = state
        .indexing_service
        .index_file(&auth, section_id, req.file_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": record })))
}

/// POST /api/sections/{section_id}/index/text: index raw text.
pub async fn index_text(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
    Json(req): Json<IndexTextRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let record = state
        .indexing_service
        .index_text(&auth, section_id, &req.document_name, &req.text)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": record })))
}

/// DELETE /api/sections/{section_id}/index/{id}
pub async fn delete_index_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.indexing_service.delete(&auth, section_id, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "deleted": true } }),
    ))
}
