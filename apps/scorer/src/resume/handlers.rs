//! Axum route handlers for résumé uploads.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::parser::extract_resume_text;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub filename: String,
    pub filesize: usize,
    pub content: String,
}

struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    data: Bytes,
}

/// POST /parse-resume
///
/// Accepts a multipart upload with a `resume` file field (PDF, DOCX or plain text)
/// and returns its whitespace-normalized text, ready for `/score`.
pub async fn handle_parse_resume(multipart: Multipart) -> Result<Json<ParseResumeResponse>, AppError> {
    let upload = read_resume_field(multipart).await?;
    let filesize = upload.data.len();

    // Document extraction is CPU-bound and may panic on malformed input.
    let filename = upload.filename.clone();
    let content = tokio::task::spawn_blocking(move || {
        extract_resume_text(&upload.filename, upload.content_type.as_deref(), &upload.data)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Resume parsing task failed: {e}")))??;

    info!(
        "Parsed resume '{}' ({} bytes → {} chars)",
        filename,
        filesize,
        content.len()
    );

    Ok(Json(ParseResumeResponse {
        filename,
        filesize,
        content,
    }))
}

async fn read_resume_field(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded resume is empty".to_string()));
        }
        return Ok(UploadedFile {
            filename,
            content_type,
            data,
        });
    }

    Err(AppError::Validation(format!(
        "No file uploaded: expected a '{RESUME_FIELD}' field"
    )))
}
