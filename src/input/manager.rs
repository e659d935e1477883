//! Input manager for handling different file types

use crate::config::InputConfig;
use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_file_size: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: config.enable_caching,
            max_file_size: config.max_file_size_bytes,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Extract trimmed, non-empty text from a document.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let file_type = self.detect_file_type(path)?;
        if file_type == FileType::Unknown {
            return Err(unsupported(path));
        }

        let size = tokio::fs::metadata(path).await?.len();
        if size > self.max_file_size {
            return Err(ResumeAnalyzerError::FileTooLarge {
                size,
                limit: self.max_file_size,
            });
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => return Err(unsupported(path)),
        };

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(ResumeAnalyzerError::ExtractionFailed(
                format!("No text found in {}", path.display())
            ));
        }
        debug!("Extracted {} characters from {}", text.len(), path.display());

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeAnalyzerError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn unsupported(path: &Path) -> ResumeAnalyzerError {
    ResumeAnalyzerError::UnsupportedFormat(format!("Unsupported file type for: {}", path.display()))
}
