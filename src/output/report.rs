//! Report structures wrapping an analysis with its provenance

use crate::processing::analyzer::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One analyzed document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// File the text was extracted from
    pub source: String,

    pub generated_at: DateTime<Utc>,

    /// Extraction plus analysis time
    pub processing_time_ms: u64,

    pub analysis: AnalysisResult,
}

impl AnalysisReport {
    pub fn new(source: impl Into<String>, processing_time_ms: u64, analysis: AnalysisResult) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
            processing_time_ms,
            analysis,
        }
    }

    pub fn sections_present(&self) -> usize {
        self.analysis.sections_found.values().filter(|found| **found).count()
    }

    /// Length warning in the wording of the upload UI
    pub fn length_warning(&self) -> Option<&'static str> {
        if self.analysis.is_too_short {
            Some("Your resume is too short. Consider adding more details.")
        } else if self.analysis.is_too_long {
            Some("Your resume is quite long. Consider making it more concise.")
        } else {
            None
        }
    }
}

pub const NO_SKILLS_MESSAGE: &str =
    "No specific skills identified. Consider adding more technical or industry-specific skills.";

pub const NO_RECOMMENDATIONS_MESSAGE: &str =
    "Your resume looks good! Consider tailoring it to specific job descriptions.";
