//! Writing assistant: generates text grounded in selected documents.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use maktabati_core::error::AppError;
use maktabati_core::result::AppResult;
use maktabati_database::repositories::file::FileRepository;
use maktabati_rag::document::extract_text_from_bytes;
use maktabati_rag::GeminiClient;
use maktabati_storage::StorageManager;

use crate::context::RequestContext;

/// Maximum number of source documents per assist request.
const MAX_SOURCE_FILES: usize = 3;

/// Generates assisted writing output from a small set of stored files.
#[derive(Debug, Clone)]
pub struct AssistantService {
    file_repo: Arc<FileRepository>,
    storage: Arc<StorageManager>,
    gemini: Arc<GeminiClient>,
}

impl AssistantService {
    /// Creates a new assistant service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        storage: Arc<StorageManager>,
        gemini: Arc<GeminiClient>,
    ) -> Self {
        Self {
            file_repo,
            storage,
            gemini,
        }
    }

    /// Generate writing output grounded in up to three stored files.
    pub async fn assist(
        &self,
        ctx: &RequestContext,
        section_id: Uuid,
        file_ids: &[Uuid],
        instruction: &str,
    ) -> AppResult<String> {
        if instruction.trim().is_empty() {
            return Err(AppError::validation("Instruction must not be empty"));
        }
        if file_ids.is_empty() {
            return Err(AppError::validation("At least one source file is required"));
        }
        if file_ids.len() > MAX_SOURCE_FILES {
            return Err(AppError::validation(format!(
                "At most {MAX_SOURCE_FILES} source files are allowed"
            )));
        }

        let mut texts = Vec::with_capacity(file_ids.len());
        for &file_id in file_ids {
            let file = self
                .file_repo
                .find_by_id(ctx.user_id, section_id, file_id)
                .await?
                .ok_or_else(|| AppError::not_found("File not found"))?;
            let key = file
                .storage_path
                .clone()
                .ok_or_else(|| AppError::validation("File has no stored content"))?;
            let data = self.storage.get(&key).await?;
            texts.push(extract_text_from_bytes(&file.name, &data).await?);
        }

        let output = self.gemini.assist(&texts, instruction).await?;
        info!(%section_id, sources = file_ids.len(), "Generated assisted writing");
        Ok(output)
    }
}
