//! Axum route handlers for the scoring API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::scoring::engine::{ComparisonReport, ScoreReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Missing fields deserialize to empty strings and are rejected by `validate`.
#[derive(Debug, Deserialize)]
pub struct ResumeJdRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

impl ResumeJdRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.resume_text.trim().is_empty() || self.job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "resume_text and job_description are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: Vec<String>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /score
///
/// Full ATS score of a résumé against a job description.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ResumeJdRequest>, JsonRejection>,
) -> Result<Json<ScoreReport>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let report = state
        .engine
        .score(&request.resume_text, &request.job_description);

    info!(
        "Scored resume: ats_score={} matched={} missing={}",
        report.ats_score,
        report.matched_skills.len(),
        report.missing_skills.len()
    );

    Ok(Json(report))
}

/// POST /compare
///
/// Matched/missing skills without scoring.
pub async fn handle_compare(
    State(state): State<AppState>,
    payload: Result<Json<ResumeJdRequest>, JsonRejection>,
) -> Result<Json<ComparisonReport>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let report = state
        .engine
        .compare(&request.resume_text, &request.job_description);

    info!(
        "Compared resume: match_percentage={} jd_skills={}",
        report.match_percentage, report.total_jd_skills
    );

    Ok(Json(report))
}

/// POST /extract-keywords
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    payload: Result<Json<ExtractKeywordsRequest>, JsonRejection>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    let Json(request) = payload?;
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text is required".to_string()));
    }

    let keywords = state.engine.extract_keywords(&request.text);
    let count = keywords.len();

    Ok(Json(ExtractKeywordsResponse { keywords, count }))
}
