//! Section hierarchy handler.

use axum::Json;
use axum::extract::{Query, State};

use maktabati_core::error::AppError;
use maktabati_entity::hierarchy::HierarchyResult;

use crate::dto::request::HierarchyQuery;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/section-hierarchy?sectionId=...
///
/// Returns the materialized tree for one section. Unlike the other
/// endpoints this body is not wrapped in the success envelope:
/// `{ section: { ...section, folders, files }, counts }` is the
/// top-level response, the shape existing clients consume.
pub async fn get_section_hierarchy(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<HierarchyQuery>,
) -> Result<Json<HierarchyResult>, ApiError> {
    let section_id = params
        .section_id
        .ok_or_else(|| AppError::validation("sectionId is required"))?;

    let hierarchy = state
        .hierarchy_service
        .get_hierarchy(&auth, section_id)
        .await?;

    Ok(Json(hierarchy))
}
