//! Text analysis for story drafts.
//!
//! [`analyze`] turns free-form text into an ordered list of classified
//! sentences and a single grade-level score. Everything here is pure: no I/O,
//! no shared mutable state, and identical input always gives an identical
//! [`AnalysisResult`], so it is safe to call on every keystroke.
//!
//! # Example
//!
//! ```rust
//! use storyscribe::analysis::analyze;
//!
//! let result = analyze("The ball was kicked. I kicked the ball.");
//! assert_eq!(result.sentences.len(), 2);
//! assert!(result.sentences[0].is_passive);
//! assert!(!result.sentences[1].is_passive);
//! ```

pub mod classification;
pub mod readability;
pub mod segmentation;

pub use classification::{
    is_complex, is_passive, AnalyzedSentence, SentenceCategory, DEFAULT_COMPLEX_WORD_THRESHOLD,
};
pub use readability::{calculate_reading_level, count_syllables, ReadabilityScore, TextStatistics};
pub use segmentation::{split_for_scoring, split_sentences, split_words};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunables for a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Word count above which a sentence is flagged complex.
    pub complex_word_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            complex_word_threshold: DEFAULT_COMPLEX_WORD_THRESHOLD,
        }
    }
}

/// Sentences in original order plus one score for the whole text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentences: Vec<AnalyzedSentence>,
    pub reading_level: ReadabilityScore,
}

impl AnalysisResult {
    pub fn count(&self, category: SentenceCategory) -> usize {
        self.sentences
            .iter()
            .filter(|sentence| sentence.category() == category)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Analyze text with the default complexity threshold.
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_with(text, &AnalysisConfig::default())
}

pub fn analyze_with(text: &str, config: &AnalysisConfig) -> AnalysisResult {
    let sentences: Vec<AnalyzedSentence> = split_sentences(text)
        .into_iter()
        .map(|sentence| AnalyzedSentence::classify(sentence, config.complex_word_threshold))
        .collect();
    let reading_level = calculate_reading_level(text);

    debug!(
        sentences = sentences.len(),
        grade = reading_level.value(),
        "analyzed text"
    );

    AnalysisResult {
        sentences,
        reading_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hello_world_is_one_clear_sentence() {
        let result = analyze("Hello world.");
        assert_eq!(
            result.sentences,
            vec![AnalyzedSentence {
                text: "Hello world.".to_string(),
                is_complex: false,
                is_passive: false,
            }]
        );
        assert_eq!(result.reading_level.value(), 2.9);
    }

    #[test]
    fn empty_text_gives_empty_result() {
        let result = analyze("");
        assert!(result.is_empty());
        assert_eq!(result.reading_level, ReadabilityScore::DEGENERATE);
    }

    #[test]
    fn custom_threshold_changes_complexity_only() {
        let config = AnalysisConfig {
            complex_word_threshold: 2,
        };
        let result = analyze_with("One two three. One two.", &config);
        assert!(result.sentences[0].is_complex);
        assert!(!result.sentences[1].is_complex);
        assert_eq!(result.reading_level, analyze("One two three. One two.").reading_level);
    }

    #[test]
    fn counts_by_category() {
        let result = analyze("The ball was kicked. I kicked the ball. Nice.");
        assert_eq!(result.count(SentenceCategory::Passive), 1);
        assert_eq!(result.count(SentenceCategory::Clear), 2);
        assert_eq!(result.count(SentenceCategory::Complex), 0);
    }

    #[test]
    fn serializes_reading_level_as_number() {
        let json = serde_json::to_value(analyze("Hello world.")).unwrap();
        assert_eq!(json["readingLevel"], 2.9);
        assert_eq!(json["sentences"][0]["text"], "Hello world.");
    }
}
