//! Common-misspelling detection.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::word_lists::MISSPELLINGS;

/// A misspelled word and its correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Misspelling {
    /// The word as the student wrote it, lowercased.
    pub word: String,
    /// The correct spelling.
    pub correction: String,
}

/// Find known misspellings. Each distinct misspelling is reported once,
/// in first-seen order.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn check_spelling(input: &str) -> Vec<Misspelling> {
    let mut seen = HashSet::new();
    text::extract_words_lower(input)
        .into_iter()
        .filter_map(|w| {
            let correction = MISSPELLINGS.get(w.as_str())?;
            seen.insert(w.clone()).then(|| Misspelling {
                word: w,
                correction: (*correction).to_string(),
            })
        })
        .collect()
}

/// Spelling findings as plain messages.
pub fn spelling_errors(input: &str) -> Vec<String> {
    check_spelling(input)
        .into_iter()
        .map(|m| format!("\"{}\" should be \"{}\"", m.word, m.correction))
        .collect()
}
