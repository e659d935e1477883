//! Text processing and normalization

use regex::Regex;
use std::collections::HashSet;

pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
    non_word_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let non_word_regex = Regex::new(r"[^\w\s]").expect("Invalid punctuation regex");
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            non_word_regex,
            whitespace_regex,
        }
    }

    /// Canonical analysis form: lowercase, punctuation replaced by spaces,
    /// whitespace runs collapsed to a single space. Not trimmed.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let without_punctuation = self.non_word_regex.replace_all(&lowered, " ");
        self.whitespace_regex
            .replace_all(&without_punctuation, " ")
            .into_owned()
    }

    /// Number of whitespace-delimited tokens in the raw text
    pub fn word_count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word.to_lowercase().as_str())
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

/// English function words (the NLTK English list).
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        let processor = TextProcessor::new();
        let normalized = processor.normalize("Phone: 555-1234,\n\tEmail: a@b.com");

        assert_eq!(normalized, "phone 555 1234 email a b com");
    }

    #[test]
    fn test_normalize_empty() {
        let processor = TextProcessor::new();
        assert_eq!(processor.normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let processor = TextProcessor::new();
        let samples = [
            "Hello, World!!  This is\n\n a TEST.",
            "  leading and trailing  ",
            "C++ / C# -- ci/cd, node.js",
            "Ünïcödé Straße: ÉCOLE",
            "under_score stays",
        ];

        for sample in samples {
            let once = processor.normalize(sample);
            assert_eq!(processor.normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_word_count_uses_raw_whitespace_tokens() {
        let processor = TextProcessor::new();
        assert_eq!(processor.word_count("Phone: 555-1234, Email: a@b.com"), 4);
        assert_eq!(processor.word_count("  one\ttwo\nthree  "), 3);
        assert_eq!(processor.word_count(""), 0);
    }

    #[test]
    fn test_stop_words_are_case_folded() {
        let processor = TextProcessor::new();
        assert!(processor.is_stop_word("The"));
        assert!(processor.is_stop_word("we"));
        assert!(!processor.is_stop_word("python"));
        assert_eq!(processor.stop_word_count(), 179);
    }
}
