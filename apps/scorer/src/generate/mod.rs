//! ATS-friendly résumé generation: structured résumé data rendered to a
//! plain single-column PDF or DOCX.

pub mod docx;
pub mod handlers;
pub mod model;
pub mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to generate PDF resume: {0}")]
    Pdf(String),

    #[error("Failed to generate DOCX resume: {0}")]
    Docx(String),
}
