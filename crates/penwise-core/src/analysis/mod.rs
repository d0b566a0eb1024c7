//! Writing analysis.
//!
//! Decomposes analysis into independent checks, orchestrated by
//! [`run_full_analysis`]. Each check is a pure function in its own module;
//! callers can also invoke them individually.

pub mod devices;
pub mod metrics;
pub mod overused;
pub mod reports;
pub mod sentence_variety;
pub mod show_tell;

use std::collections::HashSet;

pub use metrics::{LexicalMetrics, analyze_text, lexical_metrics};
pub use reports::{
    DeviceKind, LiteraryDevice, OverusedWordsReport, SentenceType, SentenceVarietyAnalysis,
    ShowTellReport, TextAnalysis, WritingReport,
};

use crate::error::{AnalysisError, AnalysisResult};
use crate::grammar;
use crate::spelling;
use crate::text;
use crate::vocabulary::{self, TextType};

/// All available check names.
pub const ALL_CHECKS: &[&str] = &[
    "metrics",
    "devices",
    "overused",
    "show_tell",
    "sentence_variety",
    "vocabulary",
    "grammar",
    "spelling",
];

/// Reject any name not in [`ALL_CHECKS`].
pub fn validate_checks(names: &[String]) -> AnalysisResult<()> {
    match names.iter().find(|n| !ALL_CHECKS.contains(&n.as_str())) {
        Some(name) => Err(AnalysisError::UnknownCheck {
            name: name.clone(),
            available: ALL_CHECKS.join(", "),
        }),
        None => Ok(()),
    }
}

/// Run writing analysis.
///
/// # Arguments
///
/// * `input`: The text to analyze.
/// * `text_type`: Genre used for vocabulary suggestions.
/// * `checks`: Optional list of check names to run. If `None`, runs all.
///
/// Empty text is not an error: every check has a defined empty result.
#[tracing::instrument(skip(input, checks), fields(text_len = input.len(), text_type = %text_type))]
pub fn run_full_analysis(
    input: &str,
    text_type: TextType,
    checks: Option<&[String]>,
) -> AnalysisResult<WritingReport> {
    if let Some(list) = checks {
        validate_checks(list)?;
    }

    let enabled: HashSet<&str> = checks.map_or_else(
        || ALL_CHECKS.iter().copied().collect(),
        |list| list.iter().map(String::as_str).collect(),
    );

    let words = text::extract_words(input);

    let metrics = enabled
        .contains("metrics")
        .then(|| metrics::analyze_text(input));

    let literary_devices = enabled
        .contains("devices")
        .then(|| devices::detect_literary_devices(input));

    let overused_words = enabled
        .contains("overused")
        .then(|| overused::analyze_overused_words(&words));

    let show_tell = enabled
        .contains("show_tell")
        .then(|| show_tell::analyze_show_dont_tell(input));

    let sentence_variety = enabled
        .contains("sentence_variety")
        .then(|| sentence_variety::analyze_sentence_variety(input));

    let vocabulary = enabled
        .contains("vocabulary")
        .then(|| vocabulary::suggest_upgrades(&words, text_type));

    let grammar = enabled
        .contains("grammar")
        .then(|| grammar::grammar_errors(input));

    let spelling = enabled
        .contains("spelling")
        .then(|| spelling::spelling_errors(input));

    tracing::debug!(checks = enabled.len(), words = words.len(), "analysis complete");

    Ok(WritingReport {
        text_type,
        metrics,
        literary_devices,
        overused_words,
        show_tell,
        sentence_variety,
        vocabulary,
        grammar,
        spelling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "The storm was a monster. Thunder roared like a lion. \
                          I was very scared, so I said nothing.";

    #[test]
    fn full_analysis_runs() {
        let report = run_full_analysis(SAMPLE, TextType::Narrative, None).unwrap();
        assert!(report.metrics.is_some());
        assert!(report.literary_devices.is_some());
        assert!(report.overused_words.is_some());
        assert!(report.show_tell.is_some());
        assert!(report.sentence_variety.is_some());
        assert!(report.vocabulary.is_some());
        assert!(report.grammar.is_some());
        assert!(report.spelling.is_some());
    }

    #[test]
    fn selective_checks() {
        let checks = vec!["devices".to_string(), "show_tell".to_string()];
        let report = run_full_analysis(SAMPLE, TextType::Narrative, Some(&checks)).unwrap();
        assert!(report.literary_devices.is_some());
        assert!(report.show_tell.is_some());
        assert!(report.metrics.is_none());
        assert!(report.vocabulary.is_none());
    }

    #[test]
    fn unknown_check_is_rejected() {
        let checks = vec!["readability".to_string()];
        let err = run_full_analysis(SAMPLE, TextType::Narrative, Some(&checks)).unwrap_err();
        assert!(err.to_string().contains("unknown check: readability"));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let report = run_full_analysis("", TextType::Persuasive, None).unwrap();
        assert_eq!(report.show_tell.unwrap().score, 1.0);
        assert_eq!(report.metrics.unwrap().word_count, 0);
    }

    #[test]
    fn vocabulary_follows_text_type() {
        let narrative = run_full_analysis(SAMPLE, TextType::Narrative, None).unwrap();
        let persuasive = run_full_analysis(SAMPLE, TextType::Persuasive, None).unwrap();
        assert_ne!(narrative.vocabulary, persuasive.vocabulary);
    }

    #[test]
    fn report_serializes_only_selected_sections() {
        let checks = vec!["metrics".to_string()];
        let report = run_full_analysis(SAMPLE, TextType::Narrative, Some(&checks)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["metrics"].is_object());
        assert!(json.get("literary_devices").is_none());
        assert_eq!(json["text_type"], "narrative");
    }
}
