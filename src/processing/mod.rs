//! Text processing and resume analysis module

pub mod text_processor;
pub mod sections;
pub mod chunker;
pub mod skills;
pub mod recommendations;
pub mod analyzer;
pub mod batch;

pub use analyzer::{AnalysisEngine, AnalysisResult};
pub use batch::analyze_batch;
