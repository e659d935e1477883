//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Thresholds and limits used by the analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Documents with fewer words are flagged as too short
    pub min_word_count: usize,
    /// Documents with more words are flagged as too long
    pub max_word_count: usize,
    /// Fewer skills than this triggers a recommendation
    pub min_skill_count: usize,
    pub max_skills: usize,
    /// Noun phrases longer than this are not treated as skills
    pub max_phrase_words: usize,
    pub enable_phrase_chunking: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub allowed_extensions: Vec<String>,
    pub max_file_size_bytes: u64,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_word_count: 300,
            max_word_count: 1000,
            min_skill_count: 5,
            max_skills: 20,
            max_phrase_words: 3,
            enable_phrase_chunking: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: vec![
                "pdf".to_string(),
                "docx".to_string(),
                "txt".to_string(),
                "md".to_string(),
            ],
            max_file_size_bytes: 16 * 1024 * 1024,
            enable_caching: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing a default file on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Overwrite `path` with the defaults, whatever it held before
    pub fn reset_at(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let analysis = &self.analysis;
        if analysis.min_word_count > analysis.max_word_count {
            return Err(ResumeAnalyzerError::Configuration(format!(
                "analysis.min_word_count ({}) exceeds analysis.max_word_count ({})",
                analysis.min_word_count, analysis.max_word_count
            )));
        }
        if analysis.max_skills == 0 {
            return Err(ResumeAnalyzerError::Configuration(
                "analysis.max_skills must be greater than zero".to_string(),
            ));
        }
        if analysis.max_phrase_words == 0 {
            return Err(ResumeAnalyzerError::Configuration(
                "analysis.max_phrase_words must be greater than zero".to_string(),
            ));
        }
        if self.input.max_file_size_bytes == 0 {
            return Err(ResumeAnalyzerError::Configuration(
                "input.max_file_size_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
