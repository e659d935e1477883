//! Recommendation synthesis from section, skill and length signals

use crate::config::AnalysisConfig;
use crate::processing::sections::{RequiredSectionTable, SectionId, SectionPresence};
use std::sync::Arc;

pub const MORE_SKILLS_MESSAGE: &str = "Include more specific skills related to your field.";
pub const TOO_SHORT_MESSAGE: &str =
    "Your resume is quite short. Consider adding more details about your experience and skills.";
pub const TOO_LONG_MESSAGE: &str =
    "Your resume is quite long. Consider condensing it to highlight your most relevant experiences.";
pub const ACHIEVEMENTS_MESSAGE: &str = "Including measurable achievements can make your resume stand out.";

pub struct RecommendationEngine {
    required: Arc<RequiredSectionTable>,
    min_skill_count: usize,
    min_word_count: usize,
    max_word_count: usize,
}

impl RecommendationEngine {
    pub fn new(required: Arc<RequiredSectionTable>, config: &AnalysisConfig) -> Self {
        Self {
            required,
            min_skill_count: config.min_skill_count,
            min_word_count: config.min_word_count,
            max_word_count: config.max_word_count,
        }
    }

    /// Feedback lines in a fixed order: missing sections, skills, length,
    /// then the achievements hint. The achievements hint is added even when a
    /// missing-section line for achievements is already present.
    pub fn build_recommendations(
        &self,
        sections_found: &SectionPresence,
        skills_found: &[String],
        word_count: usize,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        for (section, name) in self.required.iter() {
            if !is_found(sections_found, section) {
                recommendations.push(format!("Add a {} section to your resume.", name.to_lowercase()));
            }
        }

        if skills_found.len() < self.min_skill_count {
            recommendations.push(MORE_SKILLS_MESSAGE.to_string());
        }

        if word_count < self.min_word_count {
            recommendations.push(TOO_SHORT_MESSAGE.to_string());
        }
        if word_count > self.max_word_count {
            recommendations.push(TOO_LONG_MESSAGE.to_string());
        }

        if !is_found(sections_found, SectionId::Achievements) {
            recommendations.push(ACHIEVEMENTS_MESSAGE.to_string());
        }

        recommendations
    }
}

fn is_found(sections_found: &SectionPresence, section: SectionId) -> bool {
    sections_found.get(&section).copied().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(RequiredSectionTable::default()), &AnalysisConfig::default())
    }

    fn all_sections(found: bool) -> SectionPresence {
        SectionId::ALL.iter().map(|s| (*s, found)).collect()
    }

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("skill{}", i)).collect()
    }

    #[test]
    fn test_complete_resume_gets_no_recommendations() {
        let recs = engine().build_recommendations(&all_sections(true), &skills(5), 500);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_rule_order() {
        let mut found = all_sections(true);
        found.insert(SectionId::Education, false);
        found.insert(SectionId::Achievements, false);

        let recs = engine().build_recommendations(&found, &skills(2), 100);
        assert_eq!(
            recs,
            vec![
                "Add a educational background section to your resume.".to_string(),
                "Add a achievements or certifications section to your resume.".to_string(),
                MORE_SKILLS_MESSAGE.to_string(),
                TOO_SHORT_MESSAGE.to_string(),
                ACHIEVEMENTS_MESSAGE.to_string(),
            ]
        );
    }

    #[test]
    fn test_absent_key_counts_as_missing() {
        let recs = engine().build_recommendations(&SectionPresence::new(), &skills(5), 500);
        assert_eq!(recs.len(), 7);
        assert_eq!(recs[0], "Add a contact information section to your resume.");
        assert_eq!(recs[6], ACHIEVEMENTS_MESSAGE);
    }

    #[test]
    fn test_projects_never_recommended() {
        let mut found = all_sections(true);
        found.insert(SectionId::Projects, false);
        let recs = engine().build_recommendations(&found, &skills(5), 500);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_length_boundaries() {
        let engine = engine();
        let found = all_sections(true);

        assert!(engine.build_recommendations(&found, &skills(5), 300).is_empty());
        assert!(engine.build_recommendations(&found, &skills(5), 1000).is_empty());
        assert_eq!(engine.build_recommendations(&found, &skills(5), 299), vec![TOO_SHORT_MESSAGE]);
        assert_eq!(engine.build_recommendations(&found, &skills(5), 1001), vec![TOO_LONG_MESSAGE]);
    }
}
