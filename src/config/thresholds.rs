use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisConfig, DEFAULT_COMPLEX_WORD_THRESHOLD};

/// Sentence classification thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Sentences with more words than this are highlighted as complex
    #[serde(default = "default_complex_sentence_words")]
    pub complex_sentence_words: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            complex_sentence_words: default_complex_sentence_words(),
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.complex_sentence_words == 0 {
            return Err("complex_sentence_words must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            complex_word_threshold: self.complex_sentence_words,
        }
    }
}

fn default_complex_sentence_words() -> usize {
    DEFAULT_COMPLEX_WORD_THRESHOLD
}
