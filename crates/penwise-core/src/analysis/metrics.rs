//! Lexical metrics and the combined text summary.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grammar;
use crate::spelling;
use crate::text;

use super::devices;
use super::reports::TextAnalysis;
use super::show_tell;

/// Word and sentence counts with derived ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LexicalMetrics {
    /// Number of words.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// `word_count / sentence_count`, or 0 with no sentences.
    pub average_sentence_length: f64,
    /// Unique lowercase words / `word_count`, or 0 with no words.
    pub vocabulary_diversity: f64,
}

/// Compute lexical metrics.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn lexical_metrics(input: &str) -> LexicalMetrics {
    let words = text::extract_words_lower(input);
    let sentence_count = text::split_sentences(input).len();
    let word_count = words.len();

    let average_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    };

    let vocabulary_diversity = if word_count == 0 {
        0.0
    } else {
        let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
        unique.len() as f64 / word_count as f64
    };

    LexicalMetrics {
        word_count,
        sentence_count,
        average_sentence_length,
        vocabulary_diversity,
    }
}

/// Build the combined [`TextAnalysis`] for a piece of writing.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn analyze_text(input: &str) -> TextAnalysis {
    let metrics = lexical_metrics(input);
    let literary_devices = devices::detect_literary_devices(input)
        .into_iter()
        .map(|d| format!("{}: \"{}\"", d.kind, d.example))
        .collect();

    TextAnalysis {
        sentence_count: metrics.sentence_count,
        word_count: metrics.word_count,
        average_sentence_length: metrics.average_sentence_length,
        vocabulary_diversity: metrics.vocabulary_diversity,
        grammar_errors: grammar::grammar_errors(input),
        spelling_errors: spelling::spelling_errors(input),
        literary_devices,
        show_dont_tell_score: show_tell::analyze_show_dont_tell(input).score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_metrics() {
        let m = lexical_metrics("");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.average_sentence_length, 0.0);
        assert_eq!(m.vocabulary_diversity, 0.0);
    }

    #[test]
    fn punctuation_only_never_divides_by_zero() {
        let m = lexical_metrics("?!. ,;");
        assert_eq!(m.word_count, 0);
        assert!(m.average_sentence_length.is_finite());
        assert!(m.vocabulary_diversity.is_finite());
    }

    #[test]
    fn counts_and_average() {
        let m = lexical_metrics("The cat sat. The dog ran away!");
        assert_eq!(m.word_count, 7);
        assert_eq!(m.sentence_count, 2);
        assert!((m.average_sentence_length - 3.5).abs() < 1e-9);
    }

    #[test]
    fn diversity_is_case_insensitive() {
        let m = lexical_metrics("The the THE cat");
        assert!((m.vocabulary_diversity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn all_distinct_words_have_full_diversity() {
        let m = lexical_metrics("Quick brown foxes jump.");
        assert_eq!(m.vocabulary_diversity, 1.0);
    }

    #[test]
    fn diversity_stays_in_unit_range() {
        for t in ["a", "a a a a", "one two three one", "Hi. Hi! hi?"] {
            let d = lexical_metrics(t).vocabulary_diversity;
            assert!((0.0..=1.0).contains(&d), "{t}: {d}");
        }
    }

    #[test]
    fn analyze_text_combines_components() {
        let analysis = analyze_text("The moon was a lantern. i was very sad. I recieve nothing.");
        assert_eq!(analysis.sentence_count, 3);
        assert!(analysis.literary_devices.iter().any(|d| d.starts_with("Metaphor")));
        assert!(!analysis.grammar_errors.is_empty());
        assert_eq!(analysis.spelling_errors.len(), 1);
        assert!(analysis.show_dont_tell_score < 1.0);
    }

    #[test]
    fn analyze_text_is_idempotent() {
        let text = "Waves whispered while the wind wandered. It was a dream.";
        assert_eq!(analyze_text(text), analyze_text(text));
    }
}
