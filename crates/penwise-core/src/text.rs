//! Text processing utilities.
//!
//! Provides sentence splitting, word extraction, and paragraph splitting
//! for use by analysis modules. Boundaries are ASCII-only: sentences end at
//! `.`, `!`, `?` or a newline, and a word is a run of `[A-Za-z0-9_]`.

use regex::Regex;
use std::sync::LazyLock;

/// Sentence terminators and newline runs.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?\n]+").expect("valid regex"));

/// Runs of non-word characters.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid regex"));

/// Blank lines between paragraphs.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Split text into trimmed sentences.
///
/// Terminal punctuation is dropped. Empty and whitespace-only pieces are
/// discarded, so `"Wait... what?!"` yields `["Wait", "what"]`.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract words in their original case.
pub fn extract_words(text: &str) -> Vec<String> {
    NON_WORD
        .split(text)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract words, lowercased.
pub fn extract_words_lower(text: &str) -> Vec<String> {
    NON_WORD
        .split(text)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
