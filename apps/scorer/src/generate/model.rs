use serde::{Deserialize, Serialize};

/// Structured résumé content submitted for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Docx,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(OutputFormat::Pdf),
            "docx" => Some(OutputFormat::Docx),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Docx => crate::resume::parser::DOCX_MIME,
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "ats-friendly-resume.pdf",
            OutputFormat::Docx => "ats-friendly-resume.docx",
        }
    }
}

/// Visual role of a rendered line; each renderer maps it to a font and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Contact,
    Heading,
    Emphasis,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeLine {
    pub style: LineStyle,
    pub text: String,
}

impl ResumeLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ResumeData {
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Single-column layout: name, contact, then summary, skills, experience
    /// and education under upper-case headings. Empty sections are skipped.
    pub fn lines(&self) -> Vec<ResumeLine> {
        let mut lines = Vec::new();

        if let Some(name) = present(&self.name) {
            lines.push(ResumeLine::new(LineStyle::Title, name));
        }

        let contact: Vec<&str> = [present(&self.email), present(&self.phone)]
            .into_iter()
            .flatten()
            .collect();
        if !contact.is_empty() {
            lines.push(ResumeLine::new(LineStyle::Contact, contact.join(" | ")));
        }

        if let Some(summary) = present(&self.summary) {
            lines.push(ResumeLine::new(LineStyle::Heading, "PROFESSIONAL SUMMARY"));
            lines.push(ResumeLine::new(LineStyle::Body, summary));
        }

        let skills: Vec<&str> = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if !skills.is_empty() {
            lines.push(ResumeLine::new(LineStyle::Heading, "SKILLS"));
            lines.push(ResumeLine::new(LineStyle::Body, skills.join(", ")));
        }

        if !self.experience.is_empty() {
            lines.push(ResumeLine::new(LineStyle::Heading, "PROFESSIONAL EXPERIENCE"));
            for exp in &self.experience {
                lines.push(ResumeLine::new(
                    LineStyle::Emphasis,
                    format!("{} at {}", exp.title.trim(), exp.company.trim()),
                ));
                if let Some(duration) = present(&exp.duration) {
                    lines.push(ResumeLine::new(LineStyle::Body, duration));
                }
                if let Some(description) = present(&exp.description) {
                    lines.push(ResumeLine::new(LineStyle::Body, description));
                }
            }
        }

        if !self.education.is_empty() {
            lines.push(ResumeLine::new(LineStyle::Heading, "EDUCATION"));
            for edu in &self.education {
                lines.push(ResumeLine::new(
                    LineStyle::Emphasis,
                    format!("{} in {}", edu.degree.trim(), edu.field.trim()),
                ));
                lines.push(ResumeLine::new(
                    LineStyle::Body,
                    format!("{}, {}", edu.school.trim(), edu.year.trim()),
                ));
            }
        }

        lines
    }
}
