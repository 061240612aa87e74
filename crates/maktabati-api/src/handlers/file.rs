//! File CRUD, upload, download, and trash handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use uuid::Uuid;
use validator::Validate;

use maktabati_core::error::AppError;

use crate::dto::request::{FavoriteRequest, FileListQuery, RecentFilesQuery, UpdateFileRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/sections/{section_id}/files?folderId=...
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
    Query(params): Query<FileListQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let files = state
        .file_service
        .list(&auth, section_id, params.folder_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": files })))
}

/// POST /api/sections/{section_id}/files (multipart upload).
///
/// Fields: `file` (required, the content) and `folderId` (optional
/// destination).
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(section_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut folder_id: Option<Uuid> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "folderId" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                folder_id = Some(
                    Uuid::parse_str(&text)
                        .map_err(|_| AppError::validation("Invalid folderId"))?,
                );
            }
            "file" => {
                file_name = field.file_name().map(String::from);
                content_type = field.content_type().map(String::from);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::validation("file field is required"))?;
    let file_name = file_name.ok_or_else(|| AppError::validation("file name is required"))?;
    let content_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    let file = state
        .file_service
        .upload(&auth, section_id, folder_id, file_name, content_type, data)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": file })))
}

/// GET /api/sections/{section_id}/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let file = state.file_service.get(&auth, section_id, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": file })))
}

/// PUT /api/sections/{section_id}/files/{id}
pub async fn update_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateFileRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let file = state
        .file_service
        .update(&auth, section_id, id, &req.name, req.folder_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": file })))
}

/// PUT /api/sections/{section_id}/files/{id}/favorite
pub async fn set_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
    Json(req): Json<FavoriteRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let file = state
        .file_service
        .set_favorite(&auth, section_id, id, req.favorite)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": file })))
}

/// POST /api/sections/{section_id}/files/{id}/trash
pub async fn trash_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let file = state.file_service.soft_delete(&auth, section_id, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": file })))
}

/// POST /api/sections/{section_id}/files/{id}/restore
pub async fn restore_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let file = state.file_service.restore(&auth, section_id, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": file })))
}

/// DELETE /api/sections/{section_id}/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.file_service.delete(&auth, section_id, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "deleted": true } }),
    ))
}

/// GET /api/sections/{section_id}/files/{id}/download
pub async fn download_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((section_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ApiError> {
    let (file, data) = state.file_service.download(&auth, section_id, id).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file.file_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.name),
        )
        .header(header::CONTENT_LENGTH, data.len())
        .body(axum::body::Body::from(data))
        .map_err(|e| ApiError(AppError::internal(format!("Response build failed: {e}"))))
}

/// GET /api/files/starred
pub async fn starred_files(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let files = state.file_service.starred(&auth).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": files })))
}

/// GET /api/files/recent?limit=...
pub async fn recent_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<RecentFilesQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let files = state.file_service.recent(&auth, params.limit).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": files })))
}

/// GET /api/files/trash
pub async fn trashed_files(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let files = state.file_service.trash(&auth).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": files })))
}
