//! Retrieval-augmented chat handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use maktabati_core::error::AppError;

use crate::dto::request::{ChatQueryRequest, ConversationQuery};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/sections/{section_id}/query
pub async fn query(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
    Json(req): Json<ChatQueryRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let turn = if req.direct {
        state
            .chat_service
            .direct_query(&auth, section_id, &req.query)
            .await?
    } else {
        state
            .chat_service
            .query(&auth, section_id, &req.query, req.top_k)
            .await?
    };

    Ok(Json(serde_json::json!({ "success": true, "data": turn })))
}

/// GET /api/sections/{section_id}/conversations?limit=...
pub async fn list_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
    Query(params): Query<ConversationQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let turns = state
        .chat_service
        .history(&auth, section_id, params.limit)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": turns })))
}

/// DELETE /api/sections/{section_id}/conversations/{id}
pub async fn delete_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.chat_service.delete_turn(&auth, section_id, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "deleted": true } }),
    ))
}

/// DELETE /api/sections/{section_id}/conversations
pub async fn clear_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let removed = state.chat_service.clear(&auth, section_id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "removed": removed } }),
    ))
}
