use pretty_assertions::assert_eq;
use proptest::prelude::*;
use storyscribe::analysis::{split_sentences, TextStatistics};
use storyscribe::*;

fn non_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_hello_world_is_single_clear_sentence() {
    let result = analyze("Hello world.");
    assert_eq!(result.sentences.len(), 1);
    assert_eq!(result.sentences[0].text, "Hello world.");
    assert!(!result.sentences[0].is_complex);
    assert!(!result.sentences[0].is_passive);
}

#[test]
fn test_twenty_one_words_is_complex() {
    let text = "One two three four five six seven eight nine ten eleven twelve \
                thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty twentyone.";
    let result = analyze(text);
    assert_eq!(result.sentences.len(), 1);
    assert!(result.sentences[0].is_complex);
    assert_eq!(result.sentences[0].category(), SentenceCategory::Complex);
}

#[test]
fn test_passive_detection() {
    assert!(analyze("The ball was kicked.").sentences[0].is_passive);
    assert!(!analyze("I kicked the ball.").sentences[0].is_passive);
    // irregular participles are a known miss of the heuristic
    assert!(!analyze("The ball was thrown.").sentences[0].is_passive);
}

#[test]
fn test_reference_score_arithmetic() {
    let text = "The happy puppy sat down.";
    assert_eq!(
        TextStatistics::collect(text),
        TextStatistics {
            sentences: 1,
            words: 5,
            syllables: 7
        }
    );
    assert_eq!(analyze(text).reading_level.value(), 2.9);
}

#[test]
fn test_empty_input_is_defined() {
    for text in ["", "   ", "\n\t\n"] {
        let result = analyze(text);
        assert!(result.sentences.is_empty(), "text {text:?}");
        assert_eq!(result.reading_level, ReadabilityScore::DEGENERATE);
        assert_eq!(readability_summary(result.reading_level), "Grade 0.0");
    }
}

#[test]
fn test_multiline_story_preserves_order() {
    let story = "It was a dark night.\nThe door was opened slowly!\n\nWho is there? Nobody answered";
    let texts: Vec<String> = analyze(story)
        .sentences
        .into_iter()
        .map(|sentence| sentence.text)
        .collect();
    assert_eq!(
        texts,
        vec![
            "It was a dark night.",
            "The door was opened slowly!",
            "Who is there?",
            "Nobody answered",
        ]
    );
}

#[test]
fn test_segmentation_passes_can_disagree() {
    // the ellipsis splits the scoring pass but not the highlighting pass
    let text = "Wait...what happened";
    assert_eq!(split_sentences(text).len(), 1);
    assert_eq!(TextStatistics::collect(text).sentences, 2);
}

#[test]
fn test_analysis_config_threshold() {
    let config = AnalysisConfig {
        complex_word_threshold: 3,
    };
    let result = analyze_with("A short one. This sentence has five words.", &config);
    let flags: Vec<bool> = result.sentences.iter().map(|s| s.is_complex).collect();
    assert_eq!(flags, vec![false, true]);
}

proptest! {
    #[test]
    fn segmentation_preserves_non_whitespace(text in "[a-zA-Z .!?\n\t]{0,200}") {
        let joined: String = analyze(&text)
            .sentences
            .iter()
            .map(|sentence| sentence.text.as_str())
            .collect();
        prop_assert_eq!(non_whitespace(&joined), non_whitespace(&text));
    }

    #[test]
    fn sentences_are_trimmed_and_non_empty(text in "[a-z .!?\n]{0,200}") {
        for sentence in analyze(&text).sentences {
            prop_assert!(!sentence.text.is_empty());
            prop_assert_eq!(sentence.text.trim(), sentence.text.as_str());
        }
    }

    #[test]
    fn analysis_is_deterministic(text in "\\PC{0,300}") {
        let first = analyze(&text);
        let second = analyze(&text);
        prop_assert_eq!(first.reading_level.value().to_bits(), second.reading_level.value().to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn score_is_always_finite(text in "\\PC{0,300}") {
        prop_assert!(analyze(&text).reading_level.value().is_finite());
    }

    #[test]
    fn visible_text_yields_at_least_one_sentence(text in "[a-z]{1,10}[a-z .!?]{0,100}") {
        prop_assert!(!analyze(&text).sentences.is_empty());
    }
}
