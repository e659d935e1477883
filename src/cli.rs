//! CLI interface for the resume analyzer

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Resume quality analyzer")]
#[command(long_about = "Check a resume for conventional sections, notable skills and length, and get a list of recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one or more resumes
    Analyze {
        /// Resume files (PDF, DOCX, TXT, MD)
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Include report metadata and the extracted text preview
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip noun-phrase chunking (vocabulary matches only)
        #[arg(long)]
        no_phrases: bool,
    },

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

impl Commands {
    /// `config reset` and `config path` run without loading the config file,
    /// so a broken or missing file can still be repaired.
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            Commands::Config {
                action: Some(ConfigAction::Reset) | Some(ConfigAction::Path)
            }
        )
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[String]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let ext = ext.to_lowercase();
            if allowed_extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext)) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Reject any file whose extension is not in `allowed_extensions`
pub fn check_input_files(files: &[PathBuf], allowed_extensions: &[String]) -> crate::error::Result<()> {
    for file in files {
        validate_file_extension(file, allowed_extensions).map_err(|e| {
            crate::error::ResumeAnalyzerError::UnsupportedFormat(format!("{}: {}", file.display(), e))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = vec!["pdf".to_string(), "docx".to_string()];
        assert!(validate_file_extension(Path::new("resume.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("resume.docx"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("resume.txt"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("resume"), &allowed).is_err());
    }

    #[test]
    fn test_disallowed_extension_is_unsupported_format() {
        let allowed = vec!["pdf".to_string(), "txt".to_string()];
        let files = vec![PathBuf::from("a.pdf"), PathBuf::from("b.xyz")];

        let err = check_input_files(&files, &allowed).unwrap_err();
        assert!(matches!(err, crate::error::ResumeAnalyzerError::UnsupportedFormat(ref msg) if msg.contains("b.xyz")));
        assert!(check_input_files(&files[..1], &allowed).is_ok());
    }

    #[test]
    fn test_config_maintenance_skips_loading() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command;

        assert!(!parse(&["resume-analyzer", "config", "reset"]).needs_config());
        assert!(!parse(&["resume-analyzer", "-c", "/tmp/new.toml", "config", "path"]).needs_config());
        assert!(parse(&["resume-analyzer", "config", "show"]).needs_config());
        assert!(parse(&["resume-analyzer", "config"]).needs_config());
        assert!(parse(&["resume-analyzer", "analyze", "a.pdf"]).needs_config());
    }

    #[test]
    fn test_analyze_accepts_multiple_files() {
        let cli = Cli::try_parse_from(["resume-analyzer", "analyze", "a.pdf", "b.docx", "-o", "json"]).unwrap();
        match cli.command {
            Commands::Analyze { files, output, no_phrases, .. } => {
                assert_eq!(files.len(), 2);
                assert_eq!(output.as_deref(), Some("json"));
                assert!(!no_phrases);
            }
            _ => panic!("expected analyze command"),
        }
    }
}
