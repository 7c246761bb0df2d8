//! Text extraction from various file formats

use crate::error::{Result, ResumeMatcherError};
use anyhow::Context;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Produces plain text from a document's raw bytes.
///
/// Extractors never consume or reposition their input, so the same bytes can
/// be extracted any number of times.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed inputs
        let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
            .map_err(|_| ResumeMatcherError::Processing("PDF parser panicked".to_string()))?
            .map_err(|e| ResumeMatcherError::Processing(format!("Failed to extract text from PDF: {}", e)))?;

        let pages: Vec<&str> = pages
            .iter()
            .map(|page| if page.trim().is_empty() { "" } else { page.as_str() })
            .collect();

        Ok(pages.join("\n"))
    }
}

pub struct WordExtractor;

impl TextExtractor for WordExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .context("Failed to read Word document as ZIP")?;

        let mut doc_xml = String::new();
        archive
            .by_name("word/document.xml")
            .context("Invalid Word document: missing word/document.xml")?
            .read_to_string(&mut doc_xml)
            .context("Failed to read word/document.xml")?;

        let paragraphs = Self::body_paragraphs(&doc_xml)?;
        Ok(paragraphs.join("\n"))
    }
}

impl WordExtractor {
    /// Text of every non-empty top-level body paragraph, in document order.
    /// Table cells and text boxes hold their own paragraphs and are skipped.
    fn body_paragraphs(doc_xml: &str) -> anyhow::Result<Vec<String>> {
        let mut reader = Reader::from_str(doc_xml);
        let mut stack: Vec<Vec<u8>> = Vec::new();
        let mut paragraph_depth: Option<usize> = None;
        let mut paragraph = String::new();
        let mut paragraphs = Vec::new();

        loop {
            match reader.read_event().context("Malformed word/document.xml")? {
                Event::Start(e) => {
                    let name = e.local_name().as_ref().to_vec();
                    if name == b"p" && stack.last().is_some_and(|n| n == b"body") {
                        paragraph_depth = Some(stack.len());
                        paragraph.clear();
                    }
                    stack.push(name);
                }
                Event::Empty(e) => {
                    let in_run = Self::is_paragraph_run(&stack, stack.len().wrapping_sub(1), paragraph_depth);
                    if in_run {
                        match e.local_name().as_ref() {
                            b"tab" => paragraph.push('\t'),
                            b"br" | b"cr" => paragraph.push('\n'),
                            _ => {}
                        }
                    }
                }
                Event::Text(e) => {
                    let in_text = stack.last().is_some_and(|n| n == b"t")
                        && Self::is_paragraph_run(&stack, stack.len().wrapping_sub(2), paragraph_depth);
                    if in_text {
                        paragraph.push_str(&e.unescape().context("Invalid text in word/document.xml")?);
                    }
                }
                Event::End(_) => {
                    stack.pop();
                    if paragraph_depth == Some(stack.len()) {
                        if !paragraph.is_empty() {
                            paragraphs.push(std::mem::take(&mut paragraph));
                        }
                        paragraph_depth = None;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(paragraphs)
    }

    /// Whether `stack[run_index]` is a `w:r` directly inside the current body
    /// paragraph, or inside a hyperlink of that paragraph
    fn is_paragraph_run(stack: &[Vec<u8>], run_index: usize, paragraph_depth: Option<usize>) -> bool {
        let Some(depth) = paragraph_depth else {
            return false;
        };
        if !stack.get(run_index).is_some_and(|n| n == b"r") {
            return false;
        }
        run_index == depth + 1
            || (run_index == depth + 2 && stack[depth + 1].as_slice() == b"hyperlink")
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let content = String::from_utf8_lossy(bytes);
        Ok(content.replace("\r\n", "\n").replace('\r', "\n"))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    /// Assemble a minimal .docx archive around the given `<w:body>` content
    pub(crate) fn docx_with_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    /// Assemble a PDF with one page per entry, each showing its text in
    /// Helvetica; an empty entry yields a page with an empty content stream
    pub(crate) fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let first_page = 4;
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", first_page + 2 * i))
            .collect();

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>".to_string(),
        ];
        for (i, text) in pages.iter().enumerate() {
            let stream = if text.is_empty() {
                String::new()
            } else {
                format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text)
            };
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                first_page + 2 * i + 1
            ));
            objects.push(format!("<< /Length {} >>\nstream\n{}\nendstream", stream.len(), stream));
        }

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_at = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        ));
        pdf.extend_from_slice(xref.as_bytes());
        pdf
    }

    #[test]
    fn test_plain_text_is_lossy() {
        let bytes = b"Python \xff\xfe developer";
        let text = PlainTextExtractor.extract(bytes).unwrap();
        assert_eq!(text, "Python \u{FFFD}\u{FFFD} developer");
    }

    #[test]
    fn test_plain_text_normalizes_line_endings() {
        let text = PlainTextExtractor.extract(b"a\r\nb\rc\n").unwrap();
        assert_eq!(text, "a\nb\nc\n");
    }

    #[test]
    fn test_empty_inputs_yield_empty_text() {
        assert_eq!(PlainTextExtractor.extract(b"").unwrap(), "");
        assert_eq!(WordExtractor.extract(&docx_with_body("")).unwrap(), "");
    }

    #[test]
    fn test_word_paragraphs_joined_in_order() {
        let body = r#"<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
<w:p></w:p>
<w:p><w:r><w:t xml:space="preserve">Skills: </w:t></w:r><w:r><w:t>Python &amp; SQL</w:t></w:r></w:p>
<w:p><w:hyperlink><w:r><w:t>github.com/jane</w:t></w:r></w:hyperlink></w:p>
<w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t></w:r></w:p>"#;
        let text = WordExtractor.extract(&docx_with_body(body)).unwrap();
        assert_eq!(text, "Jane Doe\nSkills: Python & SQL\ngithub.com/jane\nA\tB");
    }

    #[test]
    fn test_word_table_paragraphs_are_not_body_paragraphs() {
        let body = r#"<w:p><w:r><w:t>Intro</w:t></w:r></w:p>
<w:tbl><w:tr><w:tc><w:p><w:r><w:t>Docker</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
<w:p><w:r><w:t>Outro</w:t></w:r></w:p>"#;
        let text = WordExtractor.extract(&docx_with_body(body)).unwrap();
        assert_eq!(text, "Intro\nOutro");
    }

    #[test]
    fn test_word_rejects_non_zip() {
        assert!(WordExtractor.extract(b"not a zip archive").is_err());
    }

    #[test]
    fn test_pdf_rejects_garbage() {
        assert!(PdfExtractor.extract(b"%PDF-1.4 garbage").is_err());
    }

    #[test]
    fn test_pdf_blank_page_is_empty() {
        assert_eq!(PdfExtractor.extract(&pdf_with_pages(&[""])).unwrap(), "");
    }

    #[test]
    fn test_pdf_pages_joined_in_order() {
        let text = PdfExtractor
            .extract(&pdf_with_pages(&["Python dev", "", "SQL expert"]))
            .unwrap();
        let text = text.trim();

        assert!(text.starts_with("Python dev"), "{:?}", text);
        assert!(text.ends_with("SQL expert"), "{:?}", text);

        // the blank middle page contributes only its separators
        let between = &text["Python dev".len()..text.len() - "SQL expert".len()];
        assert!(between.chars().all(|c| c == '\n'), "{:?}", between);
        assert!(between.len() >= 2, "{:?}", between);
    }
}
