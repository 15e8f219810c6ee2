//! Simplified Flesch-Kincaid grade level.
//!
//! Grade = 0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59,
//! rounded to one decimal place. Syllables are estimated by counting vowel
//! runs of one or two letters, with a floor of one per word.

use super::segmentation::{split_for_scoring, split_words};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const SENTENCE_LENGTH_WEIGHT: f64 = 0.39;
const SYLLABLE_WEIGHT: f64 = 11.8;
const GRADE_OFFSET: f64 = 15.59;

static VOWEL_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[aeiouy]{1,2}").expect("valid vowel group pattern"));

/// Estimated U.S. grade level, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadabilityScore(f64);

impl ReadabilityScore {
    /// Score reported when the text has no sentences or no words.
    pub const DEGENERATE: ReadabilityScore = ReadabilityScore(0.0);

    /// Round a raw grade to one decimal, half-up on the scaled value.
    pub fn from_raw(grade: f64) -> Self {
        Self(round_to_tenths(grade))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ReadabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Counts the readability formula is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStatistics {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

impl TextStatistics {
    pub fn collect(text: &str) -> Self {
        let words = split_words(text);
        Self {
            sentences: split_for_scoring(text).len(),
            words: words.len(),
            syllables: words.iter().map(|word| count_syllables(word)).sum(),
        }
    }

    /// True when the formula would divide by zero.
    pub fn is_degenerate(&self) -> bool {
        self.sentences == 0 || self.words == 0
    }

    pub fn grade_level(&self) -> ReadabilityScore {
        if self.is_degenerate() {
            return ReadabilityScore::DEGENERATE;
        }

        let words_per_sentence = self.words as f64 / self.sentences as f64;
        let syllables_per_word = self.syllables as f64 / self.words as f64;

        ReadabilityScore::from_raw(
            SENTENCE_LENGTH_WEIGHT * words_per_sentence + SYLLABLE_WEIGHT * syllables_per_word
                - GRADE_OFFSET,
        )
    }
}

/// Grade level for a whole text. Empty or whitespace-only text scores 0.0.
pub fn calculate_reading_level(text: &str) -> ReadabilityScore {
    TextStatistics::collect(text).grade_level()
}

/// Vowel groups of one or two letters; a word with none still counts once.
pub fn count_syllables(word: &str) -> usize {
    VOWEL_GROUP.find_iter(word).count().max(1)
}

fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
