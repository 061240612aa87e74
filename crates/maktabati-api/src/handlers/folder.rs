//! Folder CRUD handlers, scoped under a section.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use maktabati_core::error::AppError;

use crate::dto::request::{CreateFolderRequest, DeleteFolderQuery, FolderListQuery, RenameRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/sections/{section_id}/folders?parentId=...
pub async fn list_folders(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
    Query(params): Query<FolderListQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folders = state
        .folder_service
        .list(&auth, section_id, params.parent_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folders })))
}

/// POST /api/sections/{section_id}/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let folder = state
        .folder_service
        .create(&auth, section_id, req.name, req.parent_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// GET /api/sections/{section_id}/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state.folder_service.get(&auth, section_id, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// PUT /api/sections/{section_id}/folders/{id}
pub async fn rename_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let folder = state
        .folder_service
        .rename(&auth, section_id, id, &req.name)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// DELETE /api/sections/{section_id}/folders/{id}?permanent=true
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
    Query(params): Query<DeleteFolderQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .folder_service
        .delete(&auth, section_id, id, params.permanent)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "deleted": true } }),
    ))
}
