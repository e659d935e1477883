//! Shallow noun-phrase chunking

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// A noun-phrase span and its grammatical head token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounChunk {
    pub text: String,
    pub head: String,
}

impl NounChunk {
    pub fn new(text: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            head: head.into(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Produces noun-phrase spans in left-to-right document order.
///
/// Implementations are built once and shared across analyses, so they must
/// not keep per-call state.
pub trait NounPhraseChunker: Send + Sync {
    fn noun_chunks(&self, text: &str) -> Vec<NounChunk>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Determiner,
    Pronoun,
    Function,
    Content,
}

/// Rule-based chunker over Unicode word boundaries.
///
/// A phrase is an optional run of determiners or numerals followed by content
/// words; the last content word is the head. Function words, punctuation and
/// line breaks close the current phrase. Personal pronouns are emitted as
/// single-word chunks. Hyphenated compounds stay one word.
pub struct HeuristicChunker {
    determiners: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    function_words: HashSet<&'static str>,
    suffix_nouns: HashSet<&'static str>,
}

impl Default for HeuristicChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicChunker {
    pub fn new() -> Self {
        Self {
            determiners: DETERMINERS.iter().copied().collect(),
            pronouns: PRONOUNS.iter().copied().collect(),
            function_words: FUNCTION_WORDS.iter().copied().collect(),
            suffix_nouns: SUFFIX_NOUNS.iter().copied().collect(),
        }
    }

    fn classify(&self, word: &str) -> TokenClass {
        if self.determiners.contains(word) || !word.chars().any(char::is_alphabetic) {
            TokenClass::Determiner
        } else if self.pronouns.contains(word) {
            TokenClass::Pronoun
        } else if self.function_words.contains(word) || self.looks_like_verb_or_adverb(word) {
            TokenClass::Function
        } else {
            TokenClass::Content
        }
    }

    /// Past-tense verbs ("developed") and adverbs ("quickly"), apart from
    /// common nouns with the same endings ("supply", "speed")
    fn looks_like_verb_or_adverb(&self, word: &str) -> bool {
        let long_enough = word.chars().count() > 4;
        long_enough
            && (word.ends_with("ed") || word.ends_with("ly"))
            && !self.suffix_nouns.contains(word)
    }
}

#[derive(Default)]
struct PhraseBuilder {
    words: Vec<String>,
    head: Option<usize>,
    glue_next: bool,
}

impl PhraseBuilder {
    fn has_content(&self) -> bool {
        self.head.is_some()
    }

    fn push_modifier(&mut self, word: String) {
        self.words.push(word);
    }

    fn push_content(&mut self, word: String) {
        self.words.push(word);
        self.head = Some(self.words.len() - 1);
    }

    fn extend_last(&mut self, fragment: &str) {
        if let Some(last) = self.words.last_mut() {
            last.push('-');
            last.push_str(fragment);
        }
        self.glue_next = false;
    }

    fn flush_into(&mut self, chunks: &mut Vec<NounChunk>) {
        if let Some(head) = self.head {
            chunks.push(NounChunk::new(self.words.join(" "), self.words[head].clone()));
        }
        self.words.clear();
        self.head = None;
        self.glue_next = false;
    }
}

impl NounPhraseChunker for HeuristicChunker {
    fn noun_chunks(&self, text: &str) -> Vec<NounChunk> {
        let mut chunks = Vec::new();
        let mut phrase = PhraseBuilder::default();

        for token in text.split_word_bounds() {
            if token.chars().all(char::is_whitespace) {
                if phrase.glue_next || token.contains('\n') {
                    phrase.flush_into(&mut chunks);
                }
                continue;
            }

            if !token.chars().any(char::is_alphanumeric) {
                if token == "-" && phrase.has_content() && !phrase.glue_next {
                    phrase.glue_next = true;
                } else {
                    phrase.flush_into(&mut chunks);
                }
                continue;
            }

            let word = token.to_lowercase();
            if phrase.glue_next {
                phrase.extend_last(&word);
                continue;
            }

            match self.classify(&word) {
                TokenClass::Determiner => {
                    if phrase.has_content() {
                        phrase.flush_into(&mut chunks);
                    }
                    phrase.push_modifier(word);
                }
                TokenClass::Pronoun => {
                    phrase.flush_into(&mut chunks);
                    chunks.push(NounChunk::new(word.clone(), word));
                }
                TokenClass::Function => phrase.flush_into(&mut chunks),
                TokenClass::Content => phrase.push_content(word),
            }
        }

        phrase.flush_into(&mut chunks);
        chunks
    }
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her",
    "its", "our", "their", "some", "any", "each", "every", "all", "no", "several",
    "many", "few", "both", "another", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "we", "us", "you", "he", "him", "she", "it", "they", "them", "myself",
    "ourselves", "yourself", "himself", "herself", "itself", "themselves", "mine",
    "ours", "yours", "hers", "theirs",
];

const FUNCTION_WORDS: &[&str] = &[
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "as",
    "at", "before", "behind", "below", "beneath", "beside", "between", "beyond", "by",
    "despite", "down", "during", "except", "for", "from", "in", "inside", "into",
    "like", "near", "of", "off", "on", "onto", "out", "outside", "over", "per",
    "since", "through", "throughout", "to", "toward", "towards", "under", "until",
    "up", "upon", "via", "with", "within", "without",
    // conjunctions
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while",
    "whereas", "if", "unless", "than", "then", "whether",
    // auxiliaries and modals
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "will", "would", "shall", "should", "can",
    "could", "may", "might", "must",
    // wh-words and adverbs
    "what", "which", "who", "whom", "whose", "when", "where", "why", "how", "not",
    "also", "very", "too", "just", "only", "well", "more", "most", "less", "least",
    "here", "there", "now", "again", "still", "always", "never", "often",
    // common resume verbs without a regular past-tense ending
    "built", "led", "ran", "made", "wrote", "won", "grew", "took", "gave", "began",
    "brought", "taught", "kept", "held", "sold", "met", "drove", "spent", "became",
    "lead", "leads", "leading", "build", "builds", "manage", "manages", "develop",
    "develops", "create", "creates", "implement", "implements", "improve",
    "improves", "maintain", "maintains", "collaborate", "collaborates", "deliver",
    "delivers", "drive", "drives", "own", "owns", "use", "uses", "using", "work",
    "works", "working",
];

/// Nouns ending in "ed" or "ly" that show up in resumes
const SUFFIX_NOUNS: &[&str] = &[
    "supply", "assembly", "family", "anomaly", "monopoly", "reply", "rally",
    "butterfly", "jelly", "belly", "italy", "speed", "hundred", "seabed", "breed",
    "creed", "greed",
];
