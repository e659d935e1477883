//! Resume section tables and keyword-based section detection

use crate::processing::text_processor::TextProcessor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Conventional resume sections, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Contact,
    Education,
    Experience,
    Skills,
    Projects,
    Achievements,
    Summary,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Contact,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Achievements,
        SectionId::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Contact => "contact",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Achievements => "achievements",
            SectionId::Summary => "summary",
        }
    }

    /// Checklist label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Contact => "Contact Information",
            SectionId::Education => "Education",
            SectionId::Experience => "Work Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Achievements => "Achievements",
            SectionId::Summary => "Professional Summary",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence flag per section, keyed in `SectionId` order
pub type SectionPresence = BTreeMap<SectionId, bool>;

/// Keywords whose presence in normalized text marks a section.
#[derive(Debug, Clone)]
pub struct SectionKeywordTable {
    entries: Vec<(SectionId, Vec<&'static str>)>,
}

impl Default for SectionKeywordTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (SectionId::Contact, vec!["phone", "email", "address", "linkedin", "github", "contact"]),
                (
                    SectionId::Education,
                    vec![
                        "education", "university", "college", "degree", "bachelor", "master", "phd",
                        "diploma", "gpa", "academic",
                    ],
                ),
                (
                    SectionId::Experience,
                    vec![
                        "experience", "work", "employment", "job", "position", "role", "career",
                        "company", "organization",
                    ],
                ),
                (
                    SectionId::Skills,
                    vec![
                        "skills", "technologies", "tools", "programming", "languages", "competencies",
                        "technical", "proficient",
                    ],
                ),
                (
                    SectionId::Projects,
                    vec!["projects", "portfolio", "research", "developed", "implemented", "built", "created"],
                ),
                (
                    SectionId::Achievements,
                    vec!["achievements", "awards", "honors", "recognition", "accomplishments", "certifications"],
                ),
                (
                    SectionId::Summary,
                    vec!["summary", "objective", "profile", "about", "overview", "professional summary"],
                ),
            ],
        }
    }
}

impl SectionKeywordTable {
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &[&'static str])> {
        self.entries.iter().map(|(id, keywords)| (*id, keywords.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sections whose absence produces a recommendation. `projects` is detected
/// but intentionally not required.
#[derive(Debug, Clone)]
pub struct RequiredSectionTable {
    entries: Vec<(SectionId, &'static str)>,
}

impl Default for RequiredSectionTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (SectionId::Contact, "Contact information"),
                (SectionId::Education, "Educational background"),
                (SectionId::Experience, "Work experience"),
                (SectionId::Skills, "Skills and competencies"),
                (SectionId::Achievements, "Achievements or certifications"),
                (SectionId::Summary, "Professional summary"),
            ],
        }
    }
}

impl RequiredSectionTable {
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn display_name(&self, section: SectionId) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, name)| *name)
    }

    /// Display names of required sections not flagged present, in table order
    pub fn missing(&self, sections_found: &SectionPresence) -> Vec<String> {
        self.iter()
            .filter(|(id, _)| !sections_found.get(id).copied().unwrap_or(false))
            .map(|(_, name)| name.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct SectionDetector {
    table: Arc<SectionKeywordTable>,
    processor: Arc<TextProcessor>,
}

impl SectionDetector {
    pub fn new(table: Arc<SectionKeywordTable>, processor: Arc<TextProcessor>) -> Self {
        Self { table, processor }
    }

    /// Keyword hit count per section. Matching is plain substring search on
    /// normalized text, so "role" also counts inside "roleplay".
    pub fn score_sections(&self, text: &str) -> BTreeMap<SectionId, usize> {
        let normalized = self.processor.normalize(text);

        self.table
            .iter()
            .map(|(section, keywords)| {
                let score = keywords
                    .iter()
                    .map(|keyword| normalized.matches(keyword).count())
                    .sum::<usize>();
                (section, score)
            })
            .collect()
    }

    pub fn detect_sections(&self, text: &str) -> SectionPresence {
        let scores = self.score_sections(text);
        debug!("Section scores: {:?}", scores);

        scores
            .into_iter()
            .map(|(section, score)| (section, score > 0))
            .collect()
    }
}
