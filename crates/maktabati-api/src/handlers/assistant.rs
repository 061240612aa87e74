//! Writing assistant handler.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use maktabati_core::error::AppError;

use crate::dto::request::AssistRequest;
use crate::dto::response::{ApiResponse, AssistResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/sections/{section_id}/assist
pub async fn assist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
    Json(req): Json<AssistRequest>,
) -> Result<Json<ApiResponse<AssistResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let text = state
        .assistant_service
        .assist(&auth, section_id, &req.file_ids, &req.instruction)
        .await?;
    Ok(Json(ApiResponse::ok(AssistResponse { text })))
}
