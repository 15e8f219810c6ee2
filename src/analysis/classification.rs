//! Per-sentence classification: complexity and passive voice.

use super::segmentation::split_words;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentences with more words than this are flagged complex.
pub const DEFAULT_COMPLEX_WORD_THRESHOLD: usize = 20;

/// A form of "to be" followed by a word ending in "ed". Heuristic only:
/// irregular participles ("was thrown") are missed and adjectives
/// ("is red") can match. Word characters and boundaries are ASCII, so
/// accented letters end a word.
static PASSIVE_VOICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)(?:am|is|are|was|were|be|been|being)\s+[A-Za-z0-9_]+ed(?-u:\b)")
        .expect("valid passive voice pattern")
});

/// A single sentence with its classification flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedSentence {
    pub text: String,
    pub is_complex: bool,
    pub is_passive: bool,
}

impl AnalyzedSentence {
    /// Classify a sentence. The text is trimmed before it is stored.
    pub fn classify(sentence: &str, complex_threshold: usize) -> Self {
        Self {
            text: sentence.trim().to_string(),
            is_complex: is_complex(sentence, complex_threshold),
            is_passive: is_passive(sentence),
        }
    }

    pub fn category(&self) -> SentenceCategory {
        SentenceCategory::from_flags(self.is_complex, self.is_passive)
    }
}

/// Rendering category derived from the two independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceCategory {
    Clear,
    Complex,
    Passive,
    ComplexPassive,
}

impl SentenceCategory {
    pub const ALL: [SentenceCategory; 4] = [
        SentenceCategory::Complex,
        SentenceCategory::Passive,
        SentenceCategory::ComplexPassive,
        SentenceCategory::Clear,
    ];

    pub fn from_flags(is_complex: bool, is_passive: bool) -> Self {
        match (is_complex, is_passive) {
            (true, true) => Self::ComplexPassive,
            (true, false) => Self::Complex,
            (false, true) => Self::Passive,
            (false, false) => Self::Clear,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear Writing",
            Self::Complex => "Complex Sentences",
            Self::Passive => "Passive Voice",
            Self::ComplexPassive => "Complex + Passive",
        }
    }

    /// Short marker used when colors are unavailable.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Clear => None,
            Self::Complex => Some("complex"),
            Self::Passive => Some("passive"),
            Self::ComplexPassive => Some("complex+passive"),
        }
    }
}

impl fmt::Display for SentenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// True when the sentence has more than `threshold` whitespace-delimited words.
pub fn is_complex(sentence: &str, threshold: usize) -> bool {
    split_words(sentence).len() > threshold
}

pub fn is_passive(sentence: &str) -> bool {
    PASSIVE_VOICE.is_match(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_words_is_not_complex() {
        assert!(!is_complex("Hello world.", DEFAULT_COMPLEX_WORD_THRESHOLD));
    }

    #[test]
    fn complexity_boundary_is_exclusive() {
        let twenty = vec!["word"; 20].join(" ");
        let twenty_one = vec!["word"; 21].join(" ");
        assert!(!is_complex(&twenty, DEFAULT_COMPLEX_WORD_THRESHOLD));
        assert!(is_complex(&twenty_one, DEFAULT_COMPLEX_WORD_THRESHOLD));
    }

    #[test]
    fn leading_whitespace_does_not_add_words() {
        let padded = format!("   {}   ", vec!["w"; 20].join("  "));
        assert!(!is_complex(&padded, DEFAULT_COMPLEX_WORD_THRESHOLD));
    }

    #[test]
    fn detects_regular_passive() {
        assert!(is_passive("The ball was kicked."));
        assert!(is_passive("THE REPORTS WERE FILED"));
        assert!(is_passive("It has been\n\tsigned today"));
    }

    #[test]
    fn active_voice_is_not_passive() {
        assert!(!is_passive("I kicked the ball."));
        assert!(!is_passive("The ball was thrown."));
    }

    #[test]
    fn auxiliary_must_be_a_whole_word() {
        assert!(!is_passive("This island finished first."));
        assert!(!is_passive("Maybe ended early."));
    }

    #[test]
    fn participle_must_end_the_word() {
        assert!(!is_passive("She was edgy."));
        assert!(!is_passive("He is reddish."));
    }

    #[test]
    fn word_characters_are_ascii() {
        assert!(!is_passive("was écarted."));
        // an accented letter after "ed" still ends the word
        assert!(is_passive("It was kickedé."));
        assert!(is_passive("It was re-marked."));
    }

    #[test]
    fn flags_are_independent() {
        let long_passive = format!("{} was kicked.", vec!["very"; 20].join(" "));
        let sentence = AnalyzedSentence::classify(&long_passive, DEFAULT_COMPLEX_WORD_THRESHOLD);
        assert!(sentence.is_complex);
        assert!(sentence.is_passive);
        assert_eq!(sentence.category(), SentenceCategory::ComplexPassive);
    }

    #[test]
    fn category_from_flags() {
        assert_eq!(SentenceCategory::from_flags(false, false), SentenceCategory::Clear);
        assert_eq!(SentenceCategory::from_flags(true, false), SentenceCategory::Complex);
        assert_eq!(SentenceCategory::from_flags(false, true), SentenceCategory::Passive);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let sentence = AnalyzedSentence::classify("  Hi there.  ", 20);
        let json = serde_json::to_value(&sentence).unwrap();
        assert_eq!(json["text"], "Hi there.");
        assert_eq!(json["isComplex"], false);
        assert_eq!(json["isPassive"], false);
    }
}
