//! Show, don't tell.
//!
//! Flags sentences that state emotions or judgments directly ("she was
//! sad") instead of demonstrating them.

use crate::text;
use crate::word_lists::TELLING_WORDS;

use super::reports::ShowTellReport;

/// Whether a word (any case) is on the telling list.
pub fn is_telling_word(word: &str) -> bool {
    TELLING_WORDS.contains(word.to_lowercase().as_str())
}

/// Measure how much of the text tells rather than shows.
///
/// The score divides telling words by every word in the text, while
/// `telling_sentences` only lists the flagged sentences. Empty text scores 1.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn analyze_show_dont_tell(input: &str) -> ShowTellReport {
    let mut telling_sentences = Vec::new();
    let mut telling_word_count = 0usize;

    for sentence in text::split_sentences(input) {
        let hits = text::extract_words(&sentence)
            .iter()
            .filter(|w| is_telling_word(w))
            .count();
        if hits > 0 {
            telling_word_count += hits;
            telling_sentences.push(sentence.trim().to_string());
        }
    }

    let total_words = text::extract_words(input).len();
    let score = if total_words == 0 {
        1.0
    } else {
        (1.0 - telling_word_count as f64 / total_words as f64).max(0.0)
    };

    ShowTellReport {
        score,
        telling_sentences,
        telling_word_count,
        total_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_one() {
        let report = analyze_show_dont_tell("");
        assert_eq!(report.score, 1.0);
        assert!(report.telling_sentences.is_empty());
        assert_eq!(report.total_words, 0);
    }

    #[test]
    fn punctuation_only_scores_one() {
        assert_eq!(analyze_show_dont_tell("?!...").score, 1.0);
    }

    #[test]
    fn showing_text_scores_one() {
        let report = analyze_show_dont_tell("His shoulders sagged. He stared at the floor.");
        assert_eq!(report.score, 1.0);
        assert!(report.telling_sentences.is_empty());
    }

    #[test]
    fn collects_only_telling_sentences_in_original_case() {
        let report =
            analyze_show_dont_tell("Tom was SAD. His shoulders sagged. She felt happy.");
        assert_eq!(report.telling_sentences, vec!["Tom was SAD", "She felt happy"]);
        for s in &report.telling_sentences {
            assert!(text::extract_words(s).iter().any(|w| is_telling_word(w)));
        }
    }

    #[test]
    fn denominator_is_whole_text() {
        // 1 telling word ("sad") out of 8 words
        let report = analyze_show_dont_tell("Tom was sad. The rain hit the window.");
        assert_eq!(report.telling_word_count, 1);
        assert_eq!(report.total_words, 8);
        assert!((report.score - 0.875).abs() < 1e-9);
    }

    #[test]
    fn score_drops_as_density_rises() {
        let low = analyze_show_dont_tell("The dog was sad and the cat slept there.");
        let high = analyze_show_dont_tell("The dog was sad and the cat was angry.");
        assert_eq!(
            text::extract_words("The dog was sad and the cat slept there.").len(),
            text::extract_words("The dog was sad and the cat was angry.").len()
        );
        assert!(high.score < low.score);
    }

    #[test]
    fn score_never_negative() {
        let report = analyze_show_dont_tell("Very very sad.");
        assert_eq!(report.score, 0.0);
    }
}
