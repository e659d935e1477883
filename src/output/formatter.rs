//! Output formatters: console, JSON and Markdown

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::{AnalysisReport, NO_RECOMMENDATIONS_MESSAGE, NO_SKILLS_MESSAGE};
use crate::processing::sections::SectionId;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;

    fn format_batch(&self, reports: &[AnalysisReport]) -> Result<String> {
        let formatted = reports
            .iter()
            .map(|report| self.format_report(report))
            .collect::<Result<Vec<_>>>()?;
        Ok(formatted.join("\n"))
    }

    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter. Emits the bare analysis object unless metadata is
/// requested; batches become arrays.
pub struct JsonFormatter {
    pretty: bool,
    include_metadata: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_check(&self, found: bool) -> String {
        match (found, self.use_colors) {
            (true, true) => "✔".color(Color::Green).to_string(),
            (false, true) => "✘".color(Color::Red).to_string(),
            (true, false) => "[x]".to_string(),
            (false, false) => "[ ]".to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("RESUME ANALYSIS: {}", report.source), 1));
        if self.detailed {
            output.push_str(&format!(
                "Generated: {} | Processing time: {}ms\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.processing_time_ms
            ));
        }

        output.push_str(&format!("Word count: {}\n", analysis.word_count));
        if let Some(warning) = report.length_warning() {
            output.push_str(&format!("{}\n", self.colorize(warning, Color::Yellow)));
        }

        output.push_str(&self.format_header(
            &format!("Sections ({}/{})", report.sections_present(), analysis.sections_found.len()),
            2,
        ));
        for section in SectionId::ALL {
            let found = analysis.sections_found.get(&section).copied().unwrap_or(false);
            output.push_str(&format!("  {} {}\n", self.format_check(found), section.label()));
        }

        output.push_str(&self.format_header("Skills", 2));
        if analysis.skills_found.is_empty() {
            output.push_str(&format!("  {}\n", NO_SKILLS_MESSAGE));
        } else {
            let skills: Vec<String> = analysis
                .skills_found
                .iter()
                .map(|skill| self.colorize(skill, Color::Cyan))
                .collect();
            output.push_str(&format!("  {}\n", skills.join(", ")));
        }

        output.push_str(&self.format_header("Recommendations", 2));
        if analysis.recommendations.is_empty() {
            output.push_str(&format!("  {}\n", self.colorize(NO_RECOMMENDATIONS_MESSAGE, Color::Green)));
        } else {
            for (i, recommendation) in analysis.recommendations.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, recommendation));
            }
        }

        if self.detailed && !analysis.missing_sections.is_empty() {
            output.push_str(&self.format_header("Missing Required Sections", 3));
            for name in &analysis.missing_sections {
                output.push_str(&format!("  - {}\n", self.colorize(name, Color::Red)));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool, include_metadata: bool) -> Self {
        Self { pretty, include_metadata }
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.include_metadata {
            self.to_json(report)
        } else {
            self.to_json(&report.analysis)
        }
    }

    fn format_batch(&self, reports: &[AnalysisReport]) -> Result<String> {
        match reports {
            [single] => self.format_report(single),
            _ if self.include_metadata => self.to_json(reports),
            _ => {
                let analyses: Vec<_> = reports.iter().map(|r| &r.analysis).collect();
                self.to_json(&analyses)
            }
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut md = String::new();

        md.push_str(&format!("# Resume Analysis: {}\n\n", report.source));
        if self.include_metadata {
            md.push_str(&format!(
                "_Generated {} in {}ms_\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.processing_time_ms
            ));
        }

        md.push_str(&format!("**Word count:** {}\n\n", analysis.word_count));
        if let Some(warning) = report.length_warning() {
            md.push_str(&format!("> {}\n\n", warning));
        }

        md.push_str("## Sections\n\n");
        for section in SectionId::ALL {
            let found = analysis.sections_found.get(&section).copied().unwrap_or(false);
            md.push_str(&format!("- [{}] {}\n", if found { "x" } else { " " }, section.label()));
        }

        md.push_str("\n## Skills\n\n");
        if analysis.skills_found.is_empty() {
            md.push_str(&format!("{}\n", NO_SKILLS_MESSAGE));
        } else {
            let skills: Vec<String> = analysis.skills_found.iter().map(|s| format!("`{}`", s)).collect();
            md.push_str(&format!("{}\n", skills.join(" ")));
        }

        md.push_str("\n## Recommendations\n\n");
        if analysis.recommendations.is_empty() {
            md.push_str(&format!("{}\n", NO_RECOMMENDATIONS_MESSAGE));
        } else {
            for (i, recommendation) in analysis.recommendations.iter().enumerate() {
                md.push_str(&format!("{}. {}\n", i + 1, recommendation));
            }
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.detailed, config.pretty_json)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json, detailed),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_batch(&self, reports: &[AnalysisReport], format: OutputFormat) -> Result<String> {
        if reports.is_empty() {
            return Err(ResumeAnalyzerError::OutputFormatting("No reports to format".to_string()));
        }
        self.formatter(format).format_batch(reports)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// A directory target gets a generated file name inside it
pub fn resolve_save_path(target: &Path, format: OutputFormat, reports: &[AnalysisReport]) -> PathBuf {
    if !target.is_dir() {
        return target.to_path_buf();
    }
    let name = match reports {
        [single] => single.source.as_str(),
        _ => "batch",
    };
    target.join(suggest_filename(format, name, true))
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
    }
}
