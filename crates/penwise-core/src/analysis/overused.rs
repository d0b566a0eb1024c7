//! Overused word detection.

use std::collections::{HashMap, HashSet};

use crate::word_lists::STOP_WORDS;

use super::reports::{OverusedWord, OverusedWordsReport};

/// A word is overused once it appears more than this many times.
pub const OVERUSE_THRESHOLD: usize = 3;

/// Find words used more than [`OVERUSE_THRESHOLD`] times, ignoring stop words.
///
/// Words are compared case-insensitively. The report lists each word once,
/// in the order in which it first crossed the threshold while scanning left
/// to right, with its final count.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn analyze_overused_words(words: &[String]) -> OverusedWordsReport {
    let mut freq: HashMap<String, usize> = HashMap::new();
    let mut flagged: HashSet<String> = HashSet::new();
    let mut order: Vec<String> = Vec::new();

    for w in words {
        let lower = w.to_lowercase();
        if STOP_WORDS.contains(lower.as_str()) {
            continue;
        }
        let count = freq.entry(lower.clone()).or_insert(0);
        *count += 1;
        if *count > OVERUSE_THRESHOLD && flagged.insert(lower.clone()) {
            order.push(lower);
        }
    }

    let overused_words = order
        .into_iter()
        .map(|word| OverusedWord {
            count: freq[&word],
            word,
        })
        .collect();

    OverusedWordsReport {
        threshold: OVERUSE_THRESHOLD,
        overused_words,
    }
}
