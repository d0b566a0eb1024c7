//! Grammar analysis: passive voice cues and grammar checking.
//!
//! This module provides two capabilities:
//!
//! - **Passive voice cues** ([`passive_voice`]): auxiliary + past participle
//! - **Grammar checking** ([`checker`]): lowercase "i", repeated words,
//!   lowercase sentence starts, subject-verb disagreement, double negatives
//!
//! [`check_grammar_full`] combines both into a [`GrammarReport`], and
//! [`grammar_errors`] flattens that into the message list carried by
//! [`crate::analysis::TextAnalysis`].

pub mod checker;
pub mod passive_voice;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use checker::{GrammarIssue, GrammarIssueType, Severity, check_grammar};
pub use passive_voice::{PassiveVoiceMatch, detect_passive_voice};

use crate::text;

/// Full grammar analysis report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GrammarReport {
    /// Grammar issues found.
    pub issues: Vec<GrammarIssue>,
    /// Passive voice cues found.
    pub passive_voice: Vec<PassiveVoiceMatch>,
    /// Number of passive voice cues.
    pub passive_count: usize,
    /// Total number of sentences analyzed.
    pub sentence_count: usize,
}

/// Run grammar checks and passive voice detection on text.
///
/// Empty text produces an empty report.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn check_grammar_full(input: &str) -> GrammarReport {
    let sentences = text::split_sentences(input);
    let issues = check_grammar(&sentences);
    let passive_voice = detect_passive_voice(input);

    GrammarReport {
        issues,
        passive_count: passive_voice.len(),
        passive_voice,
        sentence_count: sentences.len(),
    }
}

/// Grammar findings as plain messages: issues first, then passive cues.
pub fn grammar_errors(input: &str) -> Vec<String> {
    let report = check_grammar_full(input);
    let mut errors: Vec<String> = report
        .issues
        .into_iter()
        .map(|issue| format!("Sentence {}: {}", issue.sentence_num, issue.message))
        .collect();
    errors.extend(report.passive_voice.into_iter().map(|pv| {
        format!(
            "Sentence {}: possible passive voice \"{}\"; try naming who did it",
            pv.sentence_num, pv.text
        )
    }));
    errors
}
