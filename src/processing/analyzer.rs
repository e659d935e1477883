//! Analysis engine that runs the full resume quality pipeline

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::processing::chunker::{HeuristicChunker, NounPhraseChunker};
use crate::processing::recommendations::RecommendationEngine;
use crate::processing::sections::{
    RequiredSectionTable, SectionDetector, SectionKeywordTable, SectionPresence,
};
use crate::processing::skills::{SkillExtractor, SkillLimits, SkillVocabulary};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Quality assessment of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sections_found: SectionPresence,
    pub missing_sections: Vec<String>,
    pub skills_found: Vec<String>,
    pub word_count: usize,
    pub is_too_short: bool,
    pub is_too_long: bool,
    pub recommendations: Vec<String>,
}

/// Immutable after construction; share it behind an `Arc` to analyze
/// several documents concurrently.
pub struct AnalysisEngine {
    processor: Arc<TextProcessor>,
    required: Arc<RequiredSectionTable>,
    detector: SectionDetector,
    extractor: SkillExtractor,
    recommender: RecommendationEngine,
    min_word_count: usize,
    max_word_count: usize,
}

impl AnalysisEngine {
    /// Engine with the built-in tables; uses the heuristic chunker unless
    /// phrase chunking is disabled in `config`.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let chunker: Option<Arc<dyn NounPhraseChunker>> = if config.enable_phrase_chunking {
            Some(Arc::new(HeuristicChunker::new()))
        } else {
            None
        };
        Self::with_chunker(config, chunker)
    }

    pub fn with_chunker(config: &AnalysisConfig, chunker: Option<Arc<dyn NounPhraseChunker>>) -> Result<Self> {
        Self::with_tables(
            config,
            Arc::new(SectionKeywordTable::default()),
            Arc::new(RequiredSectionTable::default()),
            Arc::new(SkillVocabulary::default()),
            chunker,
        )
    }

    pub fn with_tables(
        config: &AnalysisConfig,
        sections: Arc<SectionKeywordTable>,
        required: Arc<RequiredSectionTable>,
        vocabulary: Arc<SkillVocabulary>,
        chunker: Option<Arc<dyn NounPhraseChunker>>,
    ) -> Result<Self> {
        let processor = Arc::new(TextProcessor::new());
        let limits = SkillLimits {
            max_skills: config.max_skills,
            max_phrase_words: config.max_phrase_words,
        };

        Ok(Self {
            detector: SectionDetector::new(sections, Arc::clone(&processor)),
            extractor: SkillExtractor::new(vocabulary, chunker, Arc::clone(&processor), limits)?,
            recommender: RecommendationEngine::new(Arc::clone(&required), config),
            processor,
            required,
            min_word_count: config.min_word_count,
            max_word_count: config.max_word_count,
        })
    }

    /// Analyze already-extracted document text. Callers reject empty text
    /// before getting here.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let sections_found = self.detector.detect_sections(text);
        let skills_found = self.extractor.extract_skills(text);
        let missing_sections = self.required.missing(&sections_found);

        let word_count = self.processor.word_count(text);
        let is_too_short = word_count < self.min_word_count;
        let is_too_long = word_count > self.max_word_count;

        let recommendations = self
            .recommender
            .build_recommendations(&sections_found, &skills_found, word_count);

        debug!(
            "Analyzed {} words: {} missing sections, {} skills, {} recommendations",
            word_count,
            missing_sections.len(),
            skills_found.len(),
            recommendations.len()
        );

        AnalysisResult {
            sections_found,
            missing_sections,
            skills_found,
            word_count,
            is_too_short,
            is_too_long,
            recommendations,
        }
    }

    pub fn phrase_chunking_enabled(&self) -> bool {
        self.extractor.has_chunker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::chunker::NounChunk;
    use crate::processing::recommendations::{ACHIEVEMENTS_MESSAGE, TOO_LONG_MESSAGE, TOO_SHORT_MESSAGE};
    use crate::processing::sections::SectionId;

    struct ScriptedChunker(Vec<NounChunk>);

    impl NounPhraseChunker for ScriptedChunker {
        fn noun_chunks(&self, _text: &str) -> Vec<NounChunk> {
            self.0.clone()
        }
    }

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(&AnalysisConfig::default()).unwrap()
    }

    fn filler(words: usize) -> String {
        vec!["lorem"; words].join(" ")
    }

    #[test]
    fn test_contact_only_document() {
        let result = engine().analyze("Phone: 555-1234, Email: a@b.com");

        assert!(result.sections_found[&SectionId::Contact]);
        assert_eq!(result.sections_found.values().filter(|found| **found).count(), 1);
        assert_eq!(
            result.missing_sections,
            vec![
                "Educational background",
                "Work experience",
                "Skills and competencies",
                "Achievements or certifications",
                "Professional summary",
            ]
        );
    }

    #[test]
    fn test_short_document() {
        let result = engine().analyze(&filler(250));

        assert_eq!(result.word_count, 250);
        assert!(result.is_too_short);
        assert!(!result.is_too_long);
        assert!(result.recommendations.contains(&TOO_SHORT_MESSAGE.to_string()));
    }

    #[test]
    fn test_long_document_boundary() {
        let engine = engine();

        let result = engine.analyze(&filler(1001));
        assert!(result.is_too_long);
        assert!(result.recommendations.contains(&TOO_LONG_MESSAGE.to_string()));

        let result = engine.analyze(&filler(1000));
        assert!(!result.is_too_long);
        assert!(!result.is_too_short);
    }

    #[test]
    fn test_vocabulary_before_phrases() {
        let chunker = ScriptedChunker(vec![
            NounChunk::new("a cloud migration plan", "plan"),
            NounChunk::new("payment gateway", "gateway"),
            NounChunk::new("internal tooling", "tooling"),
            NounChunk::new("quarterly roadmap", "roadmap"),
        ]);
        let engine = AnalysisEngine::with_chunker(&AnalysisConfig::default(), Some(Arc::new(chunker))).unwrap();
        let result = engine.analyze("python javascript");

        let python = result.skills_found.iter().position(|s| s == "python").unwrap();
        let javascript = result.skills_found.iter().position(|s| s == "javascript").unwrap();
        let phrase = result.skills_found.iter().position(|s| s == "payment gateway").unwrap();
        assert!(python < phrase && javascript < phrase);
        // four-word phrase is dropped
        assert!(!result.skills_found.contains(&"a cloud migration plan".to_string()));
    }

    #[test]
    fn test_achievements_recommended_twice() {
        let result = engine().analyze("Education at a university. Work experience at a company.");

        assert!(!result.sections_found[&SectionId::Achievements]);
        assert!(result
            .recommendations
            .contains(&"Add a achievements or certifications section to your resume.".to_string()));
        assert!(result.recommendations.contains(&ACHIEVEMENTS_MESSAGE.to_string()));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let engine = engine();
        let text = "Summary\nSenior engineer with Python, Docker and AWS experience.\nAwards: hackathon winner";

        let first = serde_json::to_string(&engine.analyze(text)).unwrap();
        let second = serde_json::to_string(&engine.analyze(text)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(engine().analyze("Phone: 555-1234")).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "is_too_long",
                "is_too_short",
                "missing_sections",
                "recommendations",
                "sections_found",
                "skills_found",
                "word_count",
            ]
        );
        assert_eq!(object["sections_found"]["contact"], serde_json::Value::Bool(true));
        assert_eq!(object["sections_found"].as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_without_chunker_only_vocabulary() {
        let mut config = AnalysisConfig::default();
        config.enable_phrase_chunking = false;
        let engine = AnalysisEngine::new(&config).unwrap();

        assert!(!engine.phrase_chunking_enabled());
        let result = engine.analyze("Built a payment gateway using Kubernetes and Docker");
        assert_eq!(result.skills_found, vec!["docker", "kubernetes"]);
    }
}
