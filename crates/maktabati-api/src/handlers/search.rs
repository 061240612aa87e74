//! Semantic filename search handler.

use axum::Json;
use axum::extract::{Query, State};

use maktabati_core::error::AppError;

use crate::dto::request::SearchQuery;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/search?query=...
pub async fn search_filenames(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if params.query.trim().is_empty() {
        return Err(AppError::validation("query is required").into());
    }
    let hits = state.search_service.search(&auth, &params.query).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": hits })))
}
