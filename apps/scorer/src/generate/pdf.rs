//! Single-column A4 PDF in the PDF base-14 Helvetica faces.
//!
//! Line wrapping uses an average Helvetica glyph width (0.5 em), not
//! per-glyph metrics.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::generate::model::{LineStyle, ResumeLine};
use crate::generate::GenerateError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
/// 40pt margins.
const MARGIN_MM: f32 = 14.1;
const MM_PER_PT: f32 = 0.3528;
const AVG_CHAR_WIDTH_EM: f32 = 0.5;
const LINE_SPACING: f32 = 1.25;
const LAYER_NAME: &str = "Layer 1";

fn font_size_pt(style: LineStyle) -> f32 {
    match style {
        LineStyle::Title => 16.0,
        LineStyle::Heading => 12.0,
        LineStyle::Emphasis | LineStyle::Contact | LineStyle::Body => 11.0,
    }
}

fn is_bold(style: LineStyle) -> bool {
    matches!(style, LineStyle::Title | LineStyle::Heading | LineStyle::Emphasis)
}

/// Characters that fit on one line at the given size.
pub fn chars_per_line(size_pt: f32) -> usize {
    let text_width_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let char_width_mm = size_pt * MM_PER_PT * AVG_CHAR_WIDTH_EM;
    ((text_width_mm / char_width_mm).floor() as usize).max(1)
}

/// Greedy word wrap. Words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn render_pdf(title: &str, lines: &[ResumeLine]) -> Result<Vec<u8>, GenerateError> {
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;

    let mut current_layer = doc.get_page(page).get_layer(layer);
    let mut cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in lines {
        let size = font_size_pt(line.style);
        let font: &IndirectFontRef = if is_bold(line.style) { &bold } else { &regular };
        let advance_mm = size * LINE_SPACING * MM_PER_PT;

        if line.style == LineStyle::Heading {
            cursor_mm -= advance_mm * 0.5;
        }

        for wrapped in wrap_text(&line.text, chars_per_line(size)) {
            if cursor_mm - advance_mm < MARGIN_MM {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
                current_layer = doc.get_page(next_page).get_layer(next_layer);
                cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            cursor_mm -= advance_mm;
            current_layer.use_text(wrapped, size, Mm(MARGIN_MM), Mm(cursor_mm), font);
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn pdf_error(err: impl std::fmt::Display) -> GenerateError {
    GenerateError::Pdf(err.to_string())
}
