//! Resume analyzer: section, skill and length checks for resumes

mod cli;
mod config;
mod error;
mod input;
mod processing;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeAnalyzerError};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use log::{debug, error, info};
use output::formatter::{resolve_save_path, save_report_to_file, ReportGenerator};
use processing::analyzer::AnalysisEngine;
use processing::batch::analyze_batch;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration. `config reset` and `config path` must work even
    // when the file is missing or invalid.
    let config = if cli.command.needs_config() {
        let loaded = match &cli.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        match loaded {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Execute command
    if let Err(e) = run_command(cli.command, cli.config, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config_override: Option<PathBuf>, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            files,
            output,
            detailed,
            save,
            no_phrases,
        } => {
            info!("Starting resume analysis of {} file(s)", files.len());

            cli::check_input_files(&files, &config.input.allowed_extensions)?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeAnalyzerError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let mut analysis_config = config.analysis.clone();
            analysis_config.enable_phrase_chunking = analysis_config.enable_phrase_chunking && !no_phrases;
            let engine = Arc::new(AnalysisEngine::new(&analysis_config)?);
            debug!("Phrase chunking enabled: {}", engine.phrase_chunking_enabled());

            let mut input_manager = InputManager::from_config(&config.input);

            let progress = if files.len() > 1 {
                let bar = ProgressBar::new(files.len() as u64);
                bar.set_style(
                    ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("=> "),
                );
                Some(bar)
            } else {
                None
            };

            let show_preview = detailed && output_format == OutputFormat::Console;
            let reports = analyze_batch(&mut input_manager, engine, &files, progress.as_ref(), |file, text| {
                if show_preview {
                    println!("📄 {} preview:\n{}\n", file.display(), truncate_text(text, 300));
                }
            })
            .await;

            if let Some(bar) = progress {
                bar.finish_and_clear();
            }
            let reports = reports?;

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed,
                config.output.pretty_json,
            );
            let rendered = generator.generate_batch(&reports, output_format)?;

            match save {
                Some(target) => {
                    let path = resolve_save_path(&target, output_format, &reports);
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => {
            let path = config_override.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::reset_at(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_length).collect();
        // Find the last word boundary to avoid cutting words
        let cut = truncated.rfind(' ').unwrap_or(truncated.len());
        format!("{}...", &truncated[..cut])
    }
}
