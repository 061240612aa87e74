//! Document text extraction.

use std::path::Path;

use maktabati_core::error::{AppError, ErrorKind};
use maktabati_core::result::AppResult;

/// Extract plain text from a document on disk, dispatching on extension.
///
/// Supported: `.txt`, `.md` (read as UTF-8) and `.pdf` (via `pdf-extract`).
/// Anything else is a validation error; the caller reports it to the user.
pub async fn extract_text(path: &Path) -> AppResult<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "md" => tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read document: {}", path.display()),
                e,
            )
        }),
        "pdf" => {
            // pdf-extract is synchronous and CPU-bound; run off the runtime.
            let path = path.to_path_buf();
            tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text(&path).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to extract PDF text: {}", path.display()),
                        e,
                    )
                })
            })
            .await
            .map_err(|e| AppError::internal(format!("PDF extraction task failed: {e}")))?
        }
        other => Err(AppError::validation(format!(
            "Unsupported file type: .{other}"
        ))),
    }
}

/// Extract plain text from in-memory bytes, dispatching on the file name.
pub async fn extract_text_from_bytes(name: &str, data: &[u8]) -> AppResult<String> {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "md" => String::from_utf8(data.to_vec())
            .map_err(|e| AppError::validation(format!("Document is not valid UTF-8: {e}"))),
        "pdf" => {
            let data = data.to_vec();
            tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&data).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        "Failed to extract PDF text from upload",
                        e,
                    )
                })
            })
            .await
            .map_err(|e| AppError::internal(format!("PDF extraction task failed: {e}")))?
        }
        other => Err(AppError::validation(format!(
            "Unsupported file type: .{other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_from_bytes() {
        let text = extract_text_from_bytes("notes.txt", b"some notes")
            .await
            .unwrap();
        assert_eq!(text, "some notes");
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_validation_error() {
        let err = extract_text_from_bytes("report.docx", b"...")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
