//! Sentence highlighting keyed off the complexity and passive-voice flags.
//!
//! Complex sentences are red, passive ones yellow, sentences that are both
//! are magenta, and clear writing is green. Without color each flagged
//! sentence is prefixed with a bracketed tag instead, so the categories
//! remain distinguishable in plain output.

use colored::{ColoredString, Colorize};

use super::FormattingConfig;
use crate::analysis::{AnalysisResult, AnalyzedSentence, ReadabilityScore, SentenceCategory};

/// One-line readability summary shown under the highlighted text.
pub fn readability_summary(score: ReadabilityScore) -> String {
    format!("Grade {}", score)
}

pub struct Highlighter {
    use_color: bool,
    use_emoji: bool,
}

impl Highlighter {
    pub fn new(config: FormattingConfig) -> Self {
        let use_color = config.color.should_use_color();
        colored::control::set_override(use_color);

        Self {
            use_color,
            use_emoji: config.emoji.should_use_emoji(),
        }
    }

    pub fn plain() -> Self {
        Self::new(FormattingConfig::plain())
    }

    fn paint(&self, text: &str, category: SentenceCategory) -> ColoredString {
        match category {
            SentenceCategory::Complex => text.red(),
            SentenceCategory::Passive => text.yellow(),
            SentenceCategory::ComplexPassive => text.magenta(),
            SentenceCategory::Clear => text.green(),
        }
    }

    pub fn sentence(&self, sentence: &AnalyzedSentence) -> String {
        let category = sentence.category();
        if self.use_color {
            return self.paint(&sentence.text, category).to_string();
        }
        match category.tag() {
            Some(tag) => format!("[{}] {}", tag, sentence.text),
            None => sentence.text.clone(),
        }
    }

    /// All sentences in order, separated by single spaces.
    pub fn passage(&self, result: &AnalysisResult) -> String {
        result
            .sentences
            .iter()
            .map(|sentence| self.sentence(sentence))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One legend entry per category with its sentence count.
    pub fn legend(&self, result: &AnalysisResult) -> String {
        SentenceCategory::ALL
            .iter()
            .map(|&category| {
                let swatch = if self.use_color {
                    self.paint("■", category).to_string()
                } else {
                    format!("[{}]", category.tag().unwrap_or("clear"))
                };
                format!("{} {}: {}", swatch, category.label(), result.count(category))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    pub fn summary(&self, score: ReadabilityScore) -> String {
        let label = if self.use_emoji { "📖" } else { "Reading Level:" };
        let grade = readability_summary(score);
        if self.use_color {
            format!("{} {}", label, grade.bold())
        } else {
            format!("{} {}", label, grade)
        }
    }
}
