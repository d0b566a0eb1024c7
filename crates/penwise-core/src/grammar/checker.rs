//! Grammar issue detection.
//!
//! Checks for the slips that show up most in timed student writing: a
//! lowercase "i", repeated words, sentences that start in lowercase,
//! subject-verb disagreement, and double negatives.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// A detected grammar issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GrammarIssue {
    /// The type of grammar issue.
    pub issue_type: GrammarIssueType,
    /// Human-readable description of the issue.
    pub message: String,
    /// The sentence number (1-indexed) where the issue was found.
    pub sentence_num: usize,
    /// Severity of the issue.
    pub severity: Severity,
}

/// Types of grammar issues that can be detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GrammarIssueType {
    /// The pronoun "I" written in lowercase.
    LowercaseI,
    /// The same word twice in a row ("the the").
    RepeatedWord,
    /// Sentence starting with a lowercase letter.
    LowercaseSentenceStart,
    /// Singular subject with plural verb or vice versa.
    SubjectVerbAgreement,
    /// Two negatives in the same clause.
    DoubleNegative,
}

/// Issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Severity {
    /// Style suggestion, not necessarily wrong.
    Low,
    /// Likely issue worth addressing.
    Medium,
    /// Clear grammar error.
    High,
}

// -- Regex patterns --------------------------------------------------------

/// Subject-verb agreement patterns and their descriptions.
static SUBJECT_VERB_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"\b(?:he|she|it)\s+(?:are|were|have|don't)\b").expect("valid regex"),
            "Singular subject with plural verb",
        ),
        (
            Regex::new(r"\b(?:they|we|you)\s+(?:is|was|has|doesn't)\b").expect("valid regex"),
            "Plural subject with singular verb",
        ),
        (
            Regex::new(r"\bi\s+(?:is|are|has)\b").expect("valid regex"),
            "\"I\" takes \"am\" or \"have\"",
        ),
    ]
});

/// Double negative pattern.
static DOUBLE_NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:don't|doesn't|didn't|won't|can't|couldn't|shouldn't|wouldn't|ain't)\s+(?:\w+\s+)?(?:no|nothing|nobody|never|nowhere|neither)\b",
    )
    .expect("valid regex")
});

/// Check a list of sentences for grammar issues.
///
/// Issues are reported sentence by sentence, in the order the checks run.
#[tracing::instrument(skip_all, fields(sentence_count = sentences.len()))]
pub fn check_grammar(sentences: &[String]) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();

    for (idx, sentence) in sentences.iter().enumerate() {
        let sentence_num = idx + 1;
        let lower = sentence.to_lowercase();
        let words = text::extract_words(sentence);

        if sentence
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase())
        {
            issues.push(GrammarIssue {
                issue_type: GrammarIssueType::LowercaseSentenceStart,
                message: format!(
                    "Start the sentence with a capital letter: \"{}\"",
                    truncate(sentence.trim(), 40)
                ),
                sentence_num,
                severity: Severity::Medium,
            });
        }

        if words.iter().any(|w| w == "i") {
            issues.push(GrammarIssue {
                issue_type: GrammarIssueType::LowercaseI,
                message: "Always write \"I\" as a capital letter".to_string(),
                sentence_num,
                severity: Severity::High,
            });
        }

        for pair in words.windows(2) {
            if pair[0].eq_ignore_ascii_case(&pair[1])
                && !pair[0].chars().all(|c| c.is_ascii_digit())
            {
                issues.push(GrammarIssue {
                    issue_type: GrammarIssueType::RepeatedWord,
                    message: format!("Repeated word: \"{} {}\"", pair[0], pair[1]),
                    sentence_num,
                    severity: Severity::High,
                });
            }
        }

        for (pattern, description) in SUBJECT_VERB_PATTERNS.iter() {
            if let Some(m) = pattern.find(&lower) {
                issues.push(GrammarIssue {
                    issue_type: GrammarIssueType::SubjectVerbAgreement,
                    message: format!("{description}: \"{}\"", m.as_str()),
                    sentence_num,
                    severity: Severity::High,
                });
            }
        }

        if let Some(m) = DOUBLE_NEGATIVE.find(&lower) {
            issues.push(GrammarIssue {
                issue_type: GrammarIssueType::DoubleNegative,
                message: format!("Double negative: \"{}\"", m.as_str()),
                sentence_num,
                severity: Severity::Medium,
            });
        }
    }

    issues
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(s: &[&str]) -> Vec<String> {
        s.iter().map(|x| (*x).to_string()).collect()
    }

    fn types(issues: &[GrammarIssue]) -> Vec<GrammarIssueType> {
        issues.iter().map(|i| i.issue_type).collect()
    }

    #[test]
    fn clean_sentence_has_no_issues() {
        assert!(check_grammar(&sentences(&["The fox jumped over the fence"])).is_empty());
    }

    #[test]
    fn lowercase_i() {
        let issues = check_grammar(&sentences(&["Then i ran home"]));
        assert_eq!(types(&issues), vec![GrammarIssueType::LowercaseI]);
    }

    #[test]
    fn capital_i_is_fine() {
        assert!(check_grammar(&sentences(&["Then I ran home"])).is_empty());
    }

    #[test]
    fn repeated_word_case_insensitive() {
        let issues = check_grammar(&sentences(&["The the dog barked"]));
        assert_eq!(types(&issues), vec![GrammarIssueType::RepeatedWord]);
        assert!(issues[0].message.contains("The the"));
    }

    #[test]
    fn lowercase_start() {
        let issues = check_grammar(&sentences(&["once upon a time"]));
        assert_eq!(types(&issues), vec![GrammarIssueType::LowercaseSentenceStart]);
        assert_eq!(issues[0].sentence_num, 1);
    }

    #[test]
    fn subject_verb_disagreement() {
        let issues = check_grammar(&sentences(&["Yesterday they was late"]));
        assert_eq!(types(&issues), vec![GrammarIssueType::SubjectVerbAgreement]);
    }

    #[test]
    fn double_negative() {
        let issues = check_grammar(&sentences(&["We don't have no time"]));
        assert_eq!(types(&issues), vec![GrammarIssueType::DoubleNegative]);
    }

    #[test]
    fn sentence_numbers_are_one_indexed() {
        let issues = check_grammar(&sentences(&["Fine here", "so so sad"]));
        assert!(issues.iter().all(|i| i.sentence_num == 2));
    }

    #[test]
    fn schema_lists_only_reported_issue_kinds() {
        let schema = serde_json::to_string(&schemars::schema_for!(GrammarIssueType))
            .expect("schema serializes");
        for kind in [
            "LowercaseI",
            "RepeatedWord",
            "LowercaseSentenceStart",
            "SubjectVerbAgreement",
            "DoubleNegative",
        ] {
            assert!(schema.contains(kind), "missing {kind}");
        }
        assert!(!schema.contains("PassiveVoice"));
    }
}
