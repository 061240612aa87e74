//! Section CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use maktabati_core::error::AppError;

use crate::dto::request::{CreateSectionRequest, RenameRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/sections
pub async fn list_sections(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let sections = state.section_service.list(&auth).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": sections }),
    ))
}

/// POST /api/sections
pub async fn create_section(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSectionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let section = state
        .section_service
        .create(&auth, req.name, req.icon)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": section })))
}

/// GET /api/sections/{id}
pub async fn get_section(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let section = state.section_service.get(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": section })))
}

/// PUT /api/sections/{id}
pub async fn rename_section(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let section = state.section_service.rename(&auth, id, &req.name).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": section })))
}

/// DELETE /api/sections/{id}
pub async fn delete_section(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.section_service.delete(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "deleted": true } }),
    ))
}
