//! Minimal WordprocessingML package writer.

use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::generate::model::{LineStyle, ResumeLine};
use crate::generate::GenerateError;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;
const DOCUMENT_CLOSE: &str = "</w:body></w:document>";

/// Run properties: (bold, size in half-points).
fn run_format(style: LineStyle) -> (bool, u32) {
    match style {
        LineStyle::Title => (true, 28),
        LineStyle::Heading => (true, 24),
        LineStyle::Emphasis => (true, 20),
        LineStyle::Contact | LineStyle::Body => (false, 20),
    }
}

fn paragraph(line: &ResumeLine) -> String {
    let (bold, size) = run_format(line.style);
    let spacing = if line.style == LineStyle::Heading {
        r#"<w:pPr><w:spacing w:before="200" w:after="100"/></w:pPr>"#
    } else {
        ""
    };
    format!(
        r#"<w:p>{spacing}<w:r><w:rPr>{}<w:sz w:val="{size}"/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        if bold { "<w:b/>" } else { "" },
        escape(line.text.as_str()),
    )
}

/// Body XML for `word/document.xml`, one paragraph per line.
pub fn document_xml(lines: &[ResumeLine]) -> String {
    let mut xml = String::from(DOCUMENT_OPEN);
    for line in lines {
        xml.push_str(&paragraph(line));
    }
    xml.push_str(DOCUMENT_CLOSE);
    xml
}

/// Zips a document body into a DOCX package.
pub fn write_package(document_xml: &str) -> Result<Vec<u8>, GenerateError> {
    let docx_err = |e: zip::result::ZipError| GenerateError::Docx(e.to_string());
    let io_err = |e: std::io::Error| GenerateError::Docx(e.to_string());

    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for (name, body) in [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", PACKAGE_RELS),
        ("word/document.xml", document_xml),
    ] {
        writer.start_file(name, options).map_err(docx_err)?;
        writer.write_all(body.as_bytes()).map_err(io_err)?;
    }

    Ok(writer.finish().map_err(docx_err)?.into_inner())
}

pub fn render_docx(lines: &[ResumeLine]) -> Result<Vec<u8>, GenerateError> {
    write_package(&document_xml(lines))
}
