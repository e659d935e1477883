//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use pulldown_cmark::{Event, Parser, Tag};
use quick_xml::events::Event as XmlEvent;
use quick_xml::reader::Reader;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use tokio::fs;
use zip::ZipArchive;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

/// DOCX files are ZIP archives; the body text lives in `word/document.xml`.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Self::extract_from_bytes(bytes).map_err(|e| match e {
            ResumeAnalyzerError::DocxExtraction(msg) => {
                ResumeAnalyzerError::DocxExtraction(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }
}

impl DocxExtractor {
    pub fn extract_from_bytes(bytes: Vec<u8>) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ResumeAnalyzerError::DocxExtraction(format!("Not a valid DOCX archive: {}", e)))?;

        let document = archive
            .by_name("word/document.xml")
            .map_err(|e| ResumeAnalyzerError::DocxExtraction(format!("Missing word/document.xml: {}", e)))?;

        Self::document_xml_to_text(BufReader::new(document))
    }

    /// Collects `w:t` runs; paragraphs and explicit breaks become newlines.
    fn document_xml_to_text<R: Read>(reader: BufReader<R>) -> Result<String> {
        let mut xml_reader = Reader::from_reader(reader);
        let mut buf = Vec::with_capacity(1024);
        let mut content = String::with_capacity(8192);
        let mut in_text = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(XmlEvent::Start(e)) => {
                    if e.local_name().as_ref() == b"t" {
                        in_text = true;
                    }
                }
                Ok(XmlEvent::Empty(e)) => match e.local_name().as_ref() {
                    b"tab" => content.push('\t'),
                    b"br" | b"cr" => content.push('\n'),
                    _ => {}
                },
                Ok(XmlEvent::Text(e)) => {
                    if in_text {
                        let text = e
                            .unescape()
                            .map_err(|e| ResumeAnalyzerError::DocxExtraction(e.to_string()))?;
                        content.push_str(&text);
                    }
                }
                Ok(XmlEvent::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"p" => content.push('\n'),
                    _ => {}
                },
                Ok(XmlEvent::Eof) => break,
                Err(e) => {
                    return Err(ResumeAnalyzerError::DocxExtraction(format!(
                        "Malformed document.xml at position {}: {}",
                        xml_reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(content)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(self.markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    fn markdown_to_text(&self, markdown: &str) -> String {
        let mut text = String::with_capacity(markdown.len());

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item)
                | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
