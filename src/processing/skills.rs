//! Skill extraction: vocabulary matching plus noun-phrase candidates

use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::chunker::NounPhraseChunker;
use crate::processing::text_processor::TextProcessor;
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered list of lowercase skill and technology terms
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::from_terms(DEFAULT_SKILLS.iter().map(|s| s.to_string()))
    }
}

impl SkillVocabulary {
    /// Terms are lowercased; repeated terms keep their first position.
    pub fn from_terms(terms: impl IntoIterator<Item = String>) -> Self {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillLimits {
    pub max_skills: usize,
    pub max_phrase_words: usize,
}

impl Default for SkillLimits {
    fn default() -> Self {
        Self {
            max_skills: 20,
            max_phrase_words: 3,
        }
    }
}

/// Entries this short after trimming are dropped
const MIN_SKILL_CHARS: usize = 3;

pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
    matcher: AhoCorasick,
    chunker: Option<Arc<dyn NounPhraseChunker>>,
    processor: Arc<TextProcessor>,
    limits: SkillLimits,
}

impl SkillExtractor {
    pub fn new(
        vocabulary: Arc<SkillVocabulary>,
        chunker: Option<Arc<dyn NounPhraseChunker>>,
        processor: Arc<TextProcessor>,
        limits: SkillLimits,
    ) -> Result<Self> {
        // Standard match kind is required for overlapping search, so "react"
        // and "react native" are both reported.
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(vocabulary.terms())
            .map_err(|e| ResumeAnalyzerError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            vocabulary,
            matcher,
            chunker,
            processor,
            limits,
        })
    }

    pub fn has_chunker(&self) -> bool {
        self.chunker.is_some()
    }

    /// Up to `max_skills` distinct candidates: vocabulary terms first, in
    /// vocabulary order, then noun phrases in document order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut found = self.vocabulary_matches(&lowered);
        let vocabulary_hits = found.len();

        if let Some(chunker) = &self.chunker {
            for chunk in chunker.noun_chunks(&lowered) {
                if chunk.word_count() > self.limits.max_phrase_words {
                    continue;
                }
                let phrase = chunk.text.to_lowercase();
                if found.contains(&phrase) || self.processor.is_stop_word(&chunk.head) {
                    continue;
                }
                found.push(phrase);
            }
        }

        let mut cleaned = Self::clean(found);
        cleaned.truncate(self.limits.max_skills);
        debug!(
            "Skill extraction: {} vocabulary hits, {} candidates kept",
            vocabulary_hits,
            cleaned.len()
        );
        cleaned
    }

    /// Vocabulary terms contained anywhere in already-lowercased text
    pub fn vocabulary_matches(&self, lowered: &str) -> Vec<String> {
        let hits: HashSet<usize> = self
            .matcher
            .find_overlapping_iter(lowered)
            .map(|m| m.pattern().as_usize())
            .collect();

        self.vocabulary
            .terms()
            .iter()
            .enumerate()
            .filter(|(idx, _)| hits.contains(idx))
            .map(|(_, term)| term.clone())
            .collect()
    }

    fn clean(candidates: Vec<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .map(|candidate| candidate.trim().to_string())
            .filter(|candidate| candidate.chars().count() >= MIN_SKILL_CHARS)
            .filter(|candidate| seen.insert(candidate.clone()))
            .collect()
    }
}

const DEFAULT_SKILLS: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "react", "angular", "vue",
    "node", "html", "css", "sql", "nosql", "mongodb", "mysql", "postgresql",
    "docker", "kubernetes", "aws", "azure", "gcp", "cloud", "machine learning",
    "data science", "artificial intelligence", "ai", "ml", "deep learning",
    "natural language processing", "nlp", "computer vision", "data analysis",
    "data visualization", "tensorflow", "pytorch", "keras", "scikit-learn",
    "pandas", "numpy", "project management", "agile", "scrum", "leadership",
    "communication", "teamwork", "problem solving", "critical thinking",
    "presentation", "excel", "office", "photoshop", "illustrator", "design",
    "ui", "ux", "frontend", "backend", "fullstack", "mobile", "android", "ios",
    "swift", "kotlin", "flutter", "react native", "git", "github", "ci/cd",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::chunker::{HeuristicChunker, NounChunk};

    /// Returns a fixed list of spans regardless of input
    struct ScriptedChunker(Vec<NounChunk>);

    impl NounPhraseChunker for ScriptedChunker {
        fn noun_chunks(&self, _text: &str) -> Vec<NounChunk> {
            self.0.clone()
        }
    }

    fn extractor(chunker: Option<Arc<dyn NounPhraseChunker>>) -> SkillExtractor {
        SkillExtractor::new(
            Arc::new(SkillVocabulary::default()),
            chunker,
            Arc::new(TextProcessor::new()),
            SkillLimits::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_vocabulary_order_not_text_order() {
        let skills = extractor(None).extract_skills("Docker, JavaScript and Python");
        // "java" is contained in "javascript"
        assert_eq!(skills, vec!["python", "java", "javascript", "docker"]);
    }

    #[test]
    fn test_overlapping_terms_all_found() {
        let skills = extractor(None).extract_skills("React Native apps");
        assert!(skills.contains(&"react".to_string()));
        assert!(skills.contains(&"react native".to_string()));
    }

    #[test]
    fn test_short_terms_dropped_in_cleanup() {
        // "ai" and "ml" match but are too short to keep
        let skills = extractor(None).extract_skills("AI and ML research");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_vocabulary_precedes_phrases() {
        let chunker = ScriptedChunker(vec![
            NounChunk::new("distributed payment ledger systems", "systems"),
            NounChunk::new("payment ledger", "ledger"),
            NounChunk::new("python", "python"),
            NounChunk::new("we", "we"),
            NounChunk::new("  team  ", "team"),
        ]);
        let skills = extractor(Some(Arc::new(chunker))).extract_skills("python and javascript");

        assert_eq!(skills, vec!["python", "java", "javascript", "payment ledger", "team"]);
    }

    #[test]
    fn test_stop_word_head_is_case_folded() {
        let chunker = ScriptedChunker(vec![NounChunk::new("Those Ones", "THOSE")]);
        let skills = extractor(Some(Arc::new(chunker))).extract_skills("nothing");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_limit_and_uniqueness() {
        let chunks = (0..40)
            .map(|i| NounChunk::new(format!("skill{}", i % 30), format!("skill{}", i % 30)))
            .collect();
        let extractor = extractor(Some(Arc::new(ScriptedChunker(chunks))));
        let skills = extractor.extract_skills("python sql docker aws azure");

        assert_eq!(skills.len(), 20);
        let unique: HashSet<&String> = skills.iter().collect();
        assert_eq!(unique.len(), skills.len());
        assert_eq!(&skills[..5], &["python", "sql", "docker", "aws", "azure"]);
    }

    #[test]
    fn test_with_heuristic_chunker() {
        let extractor = extractor(Some(Arc::new(HeuristicChunker::new())));
        let skills = extractor.extract_skills("We designed a payment gateway in Rust.");

        assert!(skills.contains(&"design".to_string()));
        assert!(skills.contains(&"a payment gateway".to_string()));
        assert!(skills.contains(&"rust".to_string()));
        assert!(!skills.contains(&"we".to_string()));
        assert!(extractor.has_chunker());
    }

    #[test]
    fn test_empty_vocabulary_builds() {
        let extractor = SkillExtractor::new(
            Arc::new(SkillVocabulary::from_terms(Vec::new())),
            None,
            Arc::new(TextProcessor::new()),
            SkillLimits::default(),
        )
        .unwrap();
        assert!(extractor.extract_skills("python").is_empty());
    }
}
