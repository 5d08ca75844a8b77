//! Résumé file → plain text.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use zip::ZipArchive;

pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ResumeParseError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Failed to extract text from DOCX: {0}")]
    Docx(String),

    #[error("Plain-text resume is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Resume contains no extractable text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
    PlainText,
}

impl ResumeFormat {
    /// The file extension takes precedence over the declared content type.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Option<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => return Some(ResumeFormat::Pdf),
            Some("docx") => return Some(ResumeFormat::Docx),
            Some("txt") => return Some(ResumeFormat::PlainText),
            _ => {}
        }

        let mime = content_type?.split(';').next()?.trim().to_ascii_lowercase();
        match mime.as_str() {
            "application/pdf" => Some(ResumeFormat::Pdf),
            DOCX_MIME => Some(ResumeFormat::Docx),
            "text/plain" => Some(ResumeFormat::PlainText),
            _ => None,
        }
    }
}

/// Extracts and normalizes the text of an uploaded résumé.
pub fn extract_resume_text(
    filename: &str,
    content_type: Option<&str>,
    data: &[u8],
) -> Result<String, ResumeParseError> {
    let format = ResumeFormat::detect(filename, content_type)
        .ok_or_else(|| ResumeParseError::UnsupportedFormat(filename.to_string()))?;

    if data.is_empty() {
        return Err(ResumeParseError::Empty);
    }

    let raw = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ResumeParseError::Pdf(e.to_string()))?,
        ResumeFormat::Docx => extract_docx_text(data)?,
        ResumeFormat::PlainText => std::str::from_utf8(data)?.to_string(),
    };

    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(ResumeParseError::Empty);
    }
    Ok(text)
}

/// Raw text of a DOCX body: the `w:t` runs of `word/document.xml`, one line
/// per paragraph, tabs and breaks kept as whitespace.
pub fn extract_docx_text(data: &[u8]) -> Result<String, ResumeParseError> {
    let mut archive = ZipArchive::new(Cursor::new(data)).map_err(docx_error)?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text_run = false;
    loop {
        match reader.read_event().map_err(docx_error)? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                text.push_str(&t.unescape().map_err(docx_error)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}

fn docx_error(err: impl std::fmt::Display) -> ResumeParseError {
    ResumeParseError::Docx(err.to_string())
}

/// Collapses every whitespace run to one space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
