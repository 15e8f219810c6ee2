//! Sentence segmentation.
//!
//! Two independent passes live here. [`split_sentences`] produces the
//! sentences that are classified and highlighted; it keeps each terminator
//! attached to the sentence it ends. [`split_for_scoring`] is the coarser
//! pass the readability formula counts, which drops terminators entirely.
//! The two can disagree on irregular punctuation (ellipses followed by a
//! lowercase word, trailing whitespace after the final terminator).

use once_cell::sync::Lazy;
use regex::Regex;

/// A terminator immediately followed by a whitespace run. Only the last
/// terminator of a run like `?!` is matched, which is all the boundary needs.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary pattern"));

static TERMINATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid terminator pattern"));

/// Split text into trimmed sentences, terminators kept.
///
/// The whitespace after a terminator is the boundary and belongs to neither
/// side. Fragments that are empty after trimming are dropped, so empty and
/// whitespace-only input yields no sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // terminators are single-byte ASCII
        let end = boundary.start() + 1;
        push_trimmed(&mut sentences, &text[start..end]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

/// Split text on terminator runs for the readability formula.
///
/// Only zero-length fragments are discarded. A whitespace-only tail such as
/// the `" "` in `"Done. "` still counts as a sentence here.
pub fn split_for_scoring(text: &str) -> Vec<&str> {
    TERMINATOR_RUN
        .split(text)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Split on any whitespace run, never yielding empty tokens.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
