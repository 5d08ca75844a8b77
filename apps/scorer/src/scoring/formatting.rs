//! Formatting compliance: structural conventions ATS parsers expect.
//!
//! Five points are available:
//! - 2 for naming at least three standard section headings
//! - 1 for a recognisable date (`2021-04`, `2021/04`, `March 2021`)
//! - 1 for an email address
//! - 1 for something phone-shaped (7+ digits, dashes, parens or spaces)
//! - 1 for more than ten lines of text

use regex::Regex;
use serde::Serialize;

const SECTION_HEADINGS: &[&str] = &["experience", "education", "skills", "summary", "contact"];
const MIN_SECTION_HEADINGS: usize = 3;
const MIN_LINES: usize = 10;
const MAX_POINTS: u32 = 5;

/// Points from the checklist, out of 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormattingChecklist {
    pub section_headings: usize,
    pub has_date: bool,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_line_structure: bool,
}

impl FormattingChecklist {
    pub fn points(&self) -> u32 {
        let mut points = 0;
        if self.section_headings >= MIN_SECTION_HEADINGS {
            points += 2;
        }
        points += u32::from(self.has_date);
        points += u32::from(self.has_email);
        points += u32::from(self.has_phone);
        points += u32::from(self.has_line_structure);
        points
    }

    /// Compliance in [0, 1].
    pub fn ratio(&self) -> f64 {
        (f64::from(self.points()) / f64::from(MAX_POINTS)).min(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct FormattingChecker {
    sections: Vec<Regex>,
    date: Regex,
    email: Regex,
    phone: Regex,
}

impl FormattingChecker {
    pub fn new() -> Result<Self, regex::Error> {
        let sections = SECTION_HEADINGS
            .iter()
            .map(|s| Regex::new(&format!(r"(?i)\b{s}\b")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sections,
            date: Regex::new(
                r"(?i)\d{4}[-/]\d{2}|\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s*\d{4}",
            )?,
            email: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")?,
            phone: Regex::new(r"[\d\-()\s]{7,}")?,
        })
    }

    pub fn check(&self, text: &str) -> FormattingChecklist {
        FormattingChecklist {
            section_headings: self.sections.iter().filter(|re| re.is_match(text)).count(),
            has_date: self.date.is_match(text),
            has_email: self.email.is_match(text),
            has_phone: self.phone.is_match(text),
            has_line_structure: text.split('\n').count() > MIN_LINES,
        }
    }
}
