//! Batch analysis over several input files

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::manager::InputManager;
use crate::output::report::AnalysisReport;
use crate::processing::analyzer::{AnalysisEngine, AnalysisResult};
use indicatif::ProgressBar;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

struct PendingAnalysis {
    file: PathBuf,
    extraction: Duration,
    handle: JoinHandle<(AnalysisResult, Duration)>,
}

/// Extracts each file in turn and analyzes it on the blocking pool.
///
/// Reports come back in input order. Files that fail are logged and skipped;
/// the batch only fails when no file could be analyzed. `on_extracted` sees
/// each file's text before analysis starts.
pub async fn analyze_batch<F>(
    manager: &mut InputManager,
    engine: Arc<AnalysisEngine>,
    files: &[PathBuf],
    progress: Option<&ProgressBar>,
    mut on_extracted: F,
) -> Result<Vec<AnalysisReport>>
where
    F: FnMut(&Path, &str),
{
    let mut pending = Vec::with_capacity(files.len());
    let mut failures = 0usize;

    for file in files {
        if let Some(bar) = progress {
            bar.set_message(file.display().to_string());
        }

        let started = Instant::now();
        match manager.extract_text(file).await {
            Ok(text) => {
                let extraction = started.elapsed();
                on_extracted(file, &text);

                let engine = Arc::clone(&engine);
                let handle = tokio::task::spawn_blocking(move || {
                    let started = Instant::now();
                    let analysis = engine.analyze(&text);
                    (analysis, started.elapsed())
                });
                pending.push(PendingAnalysis {
                    file: file.clone(),
                    extraction,
                    handle,
                });
            }
            Err(e) => {
                warn!("Skipping {}: {}", file.display(), e);
                failures += 1;
                if let Some(bar) = progress {
                    bar.inc(1);
                }
            }
        }
    }

    let mut reports = Vec::with_capacity(pending.len());
    for PendingAnalysis { file, extraction, handle } in pending {
        match handle.await {
            Ok((analysis, analysis_time)) => {
                let elapsed = (extraction + analysis_time).as_millis() as u64;
                info!("Analyzed {} in {}ms", file.display(), elapsed);
                reports.push(AnalysisReport::new(file.display().to_string(), elapsed, analysis));
            }
            Err(e) => {
                warn!("Analysis task for {} failed: {}", file.display(), e);
                failures += 1;
            }
        }
        if let Some(bar) = progress {
            bar.inc(1);
        }
    }

    if reports.is_empty() {
        return Err(ResumeAnalyzerError::Processing(format!(
            "All {} file(s) failed to process",
            failures
        )));
    }
    if failures > 0 {
        warn!("{} of {} file(s) could not be analyzed", failures, files.len());
    }

    Ok(reports)
}
