//! Sentence variety: length buckets and sentence structure.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;

use super::reports::{
    LengthDistribution, SentenceType, SentenceVarietyAnalysis, TypeDistribution,
};

/// Coordinating conjunctions (FANBOYS).
static COORDINATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:for|and|nor|but|or|yet|so)\b").expect("valid regex")
});

/// Subordinating conjunctions and relative pronouns.
static SUBORDINATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:because|although|though|since|unless|while|whereas|if|when|whenever|after|before|until|which|who|whom|whose|that|where)\b",
    )
    .expect("valid regex")
});

/// Upper bound (inclusive) for a short sentence.
const SHORT_MAX_WORDS: usize = 10;
/// Upper bound (inclusive) for a medium sentence.
const MEDIUM_MAX_WORDS: usize = 20;

/// Classify a sentence by structure.
///
/// Priority: compound-complex, then compound, then complex, then simple.
pub fn classify_sentence(sentence: &str) -> SentenceType {
    let coordinating = COORDINATING_RE.is_match(sentence);
    let subordinating = SUBORDINATING_RE.is_match(sentence);

    if coordinating && subordinating {
        SentenceType::CompoundComplex
    } else if coordinating {
        SentenceType::Compound
    } else if subordinating {
        SentenceType::Complex
    } else {
        SentenceType::Simple
    }
}

/// Analyze sentence lengths and structures.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn analyze_sentence_variety(input: &str) -> SentenceVarietyAnalysis {
    let sentences = text::split_sentences(input);
    let mut lengths = LengthDistribution::default();
    let mut types = TypeDistribution::default();
    let mut total_words = 0usize;

    for sentence in &sentences {
        let words = text::extract_words(sentence).len();
        total_words += words;

        match words {
            0..=SHORT_MAX_WORDS => lengths.short += 1,
            n if n <= MEDIUM_MAX_WORDS => lengths.medium += 1,
            _ => lengths.long += 1,
        }

        match classify_sentence(sentence) {
            SentenceType::Simple => types.simple += 1,
            SentenceType::Compound => types.compound += 1,
            SentenceType::Complex => types.complex += 1,
            SentenceType::CompoundComplex => types.compound_complex += 1,
        }
    }

    let average_sentence_length = if sentences.is_empty() {
        0.0
    } else {
        total_words as f64 / sentences.len() as f64
    };

    SentenceVarietyAnalysis {
        total_sentences: sentences.len(),
        average_sentence_length,
        sentence_length_distribution: lengths,
        sentence_type_distribution: types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_priority() {
        assert_eq!(classify_sentence("The dog barked"), SentenceType::Simple);
        assert_eq!(
            classify_sentence("The dog barked and the cat ran"),
            SentenceType::Compound
        );
        assert_eq!(
            classify_sentence("The dog barked because it was hungry"),
            SentenceType::Complex
        );
        assert_eq!(
            classify_sentence("The dog barked because it was hungry, but nobody came"),
            SentenceType::CompoundComplex
        );
    }

    #[test]
    fn conjunctions_match_whole_words_only() {
        // "android", "forest" and "butter" contain conjunctions as substrings
        assert_eq!(
            classify_sentence("The android ate butter in the forest"),
            SentenceType::Simple
        );
    }

    #[test]
    fn length_buckets() {
        let ten = "one two three four five six seven eight nine ten.";
        let eleven = "one two three four five six seven eight nine ten eleven.";
        let twenty_one = "a a a a a a a a a a a a a a a a a a a a a.";
        let report = analyze_sentence_variety(&format!("{ten} {eleven} {twenty_one}"));
        assert_eq!(report.sentence_length_distribution.short, 1);
        assert_eq!(report.sentence_length_distribution.medium, 1);
        assert_eq!(report.sentence_length_distribution.long, 1);
    }

    #[test]
    fn counts_sum_to_total() {
        let text = "I ran. I ran and jumped. I ran because I could. \
                    I ran and jumped because I could!\nWho knows?";
        let report = analyze_sentence_variety(text);
        assert_eq!(report.total_sentences, 5);
        assert_eq!(report.sentence_type_distribution.total(), report.total_sentences);
        let lengths = &report.sentence_length_distribution;
        assert_eq!(lengths.short + lengths.medium + lengths.long, report.total_sentences);
    }

    #[test]
    fn empty_text() {
        let report = analyze_sentence_variety("   \n\n ");
        assert_eq!(report.total_sentences, 0);
        assert_eq!(report.average_sentence_length, 0.0);
    }

    #[test]
    fn average_length() {
        let report = analyze_sentence_variety("One two. Three four five six.");
        assert!((report.average_sentence_length - 3.0).abs() < 1e-9);
    }

    #[test]
    fn type_distribution_serializes_camel_case() {
        let report = analyze_sentence_variety("It rained.");
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["sentence_type_distribution"]["compoundComplex"].is_number());
    }
}
