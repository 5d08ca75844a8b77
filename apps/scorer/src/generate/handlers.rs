//! Axum route handler for résumé generation.

use axum::{
    extract::rejection::JsonRejection,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generate::docx::render_docx;
use crate::generate::model::{OutputFormat, ResumeData};
use crate::generate::pdf::render_pdf;

const DEFAULT_PDF_TITLE: &str = "Resume";

#[derive(Debug, Deserialize)]
pub struct GenerateResumeRequest {
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
    #[serde(default)]
    pub format: String,
}

/// POST /generate-resume
///
/// Renders `resume_data` as an attachment in the requested `format`
/// (`pdf` or `docx`).
pub async fn handle_generate_resume(
    payload: Result<Json<GenerateResumeRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;

    let data = request
        .resume_data
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::Validation("resume_data is required".to_string()))?;
    let format = OutputFormat::parse(&request.format)
        .ok_or_else(|| AppError::Validation("format must be pdf or docx".to_string()))?;

    let bytes = tokio::task::spawn_blocking(move || {
        let lines = data.lines();
        match format {
            OutputFormat::Pdf => {
                let title = data.name.as_deref().unwrap_or(DEFAULT_PDF_TITLE);
                render_pdf(title, &lines)
            }
            OutputFormat::Docx => render_docx(&lines),
        }
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Resume generation task failed: {e}")))??;

    info!(
        "Generated resume '{}' ({} bytes)",
        format.filename(),
        bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.filename()),
            ),
        ],
        bytes,
    )
        .into_response())
}
