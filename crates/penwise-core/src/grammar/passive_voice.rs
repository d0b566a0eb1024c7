//! Passive voice cues.
//!
//! Flags an auxiliary ("was", "is", "been"...) immediately followed by a
//! past participle. This is a cue, not a parse: "was tired" is skipped via
//! an adjective exception list, but other false positives remain.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::word_lists::{ADJECTIVE_PARTICIPLES, IRREGULAR_PARTICIPLES};

/// Auxiliary verbs that introduce passive constructions.
const PASSIVE_AUXILIARIES: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];

/// Regular past participles (words ending in -ed).
static REGULAR_PARTICIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,}ed$").expect("valid regex"));

/// A detected passive voice cue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PassiveVoiceMatch {
    /// The matched text (e.g., "was written").
    pub text: String,
    /// The sentence number (1-indexed) where the match was found.
    pub sentence_num: usize,
    /// The auxiliary verb (e.g., "was").
    pub auxiliary: String,
    /// The past participle (e.g., "written").
    pub participle: String,
}

/// Detect passive voice cues, sentence by sentence, left to right.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn detect_passive_voice(input: &str) -> Vec<PassiveVoiceMatch> {
    let mut matches = Vec::new();

    for (idx, sentence) in text::split_sentences(input).iter().enumerate() {
        let words = text::extract_words_lower(sentence);
        for pair in words.windows(2) {
            let (aux, next) = (&pair[0], &pair[1]);
            if PASSIVE_AUXILIARIES.contains(&aux.as_str()) && is_likely_past_participle(next) {
                matches.push(PassiveVoiceMatch {
                    text: format!("{aux} {next}"),
                    sentence_num: idx + 1,
                    auxiliary: aux.clone(),
                    participle: next.clone(),
                });
            }
        }
    }

    matches
}

fn is_likely_past_participle(word: &str) -> bool {
    if ADJECTIVE_PARTICIPLES.contains(word) {
        return false;
    }
    IRREGULAR_PARTICIPLES.contains(word) || REGULAR_PARTICIPLE.is_match(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_regular_participle() {
        let matches = detect_passive_voice("The window was smashed by the ball.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "was smashed");
        assert_eq!(matches[0].sentence_num, 1);
    }

    #[test]
    fn detects_irregular_participle() {
        let matches = detect_passive_voice("The cake was eaten. The letter is written.");
        let texts: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["was eaten", "is written"]);
        assert_eq!(matches[1].sentence_num, 2);
    }

    #[test]
    fn skips_adjective_exceptions() {
        assert!(detect_passive_voice("She was tired after the race.").is_empty());
    }

    #[test]
    fn chained_auxiliaries() {
        let matches = detect_passive_voice("The road was being repaired.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].auxiliary, "being");
    }

    #[test]
    fn active_voice_is_clean() {
        assert!(detect_passive_voice("The ball smashed the window.").is_empty());
        assert!(detect_passive_voice("").is_empty());
    }
}
