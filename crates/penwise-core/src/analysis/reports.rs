//! Report structs for writing analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::vocabulary::{TextType, WordUpgrade};

/// Writing analysis report combining the selected checks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WritingReport {
    /// Text type the report was produced for.
    pub text_type: TextType,
    /// Counts, averages, and the combined summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<TextAnalysis>,
    /// Every literary device match, in detector order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literary_devices: Option<Vec<LiteraryDevice>>,
    /// Words used more than the overuse threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overused_words: Option<OverusedWordsReport>,
    /// Telling vs showing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_tell: Option<ShowTellReport>,
    /// Sentence length and structure distribution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_variety: Option<SentenceVarietyAnalysis>,
    /// Weak words with genre-specific alternatives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<WordUpgrade>>,
    /// Grammar findings, passive-voice cues included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<Vec<String>>,
    /// Spelling findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling: Option<Vec<String>>,
}

// -- Text Analysis ----------------------------------------------------------

/// Summary analysis of a piece of writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextAnalysis {
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of words.
    pub word_count: usize,
    /// Words per sentence (0 when there are no sentences).
    pub average_sentence_length: f64,
    /// Unique words / total words, case-insensitive (0 when there are no words).
    pub vocabulary_diversity: f64,
    /// Grammar findings.
    pub grammar_errors: Vec<String>,
    /// Spelling findings.
    pub spelling_errors: Vec<String>,
    /// Literary devices, one line per match.
    pub literary_devices: Vec<String>,
    /// Show/don't-tell score in `[0, 1]`.
    pub show_dont_tell_score: f64,
}

// -- Literary Devices -------------------------------------------------------

/// Kinds of literary device the detectors recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Repeated initial consonant sounds.
    Alliteration,
    /// Direct comparison.
    Metaphor,
    /// Comparison using "like" or "as".
    Simile,
    /// Human qualities given to things.
    Personification,
    /// Deliberate exaggeration.
    Hyperbole,
}

impl DeviceKind {
    /// Returns the device name in title case.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Alliteration => "Alliteration",
            Self::Metaphor => "Metaphor",
            Self::Simile => "Simile",
            Self::Personification => "Personification",
            Self::Hyperbole => "Hyperbole",
        }
    }

    /// Static explanation shown alongside every match.
    pub const fn explanation(&self) -> &'static str {
        match self {
            Self::Alliteration => {
                "Repetition of the same initial consonant sound in neighbouring words."
            }
            Self::Metaphor => "A direct comparison that says one thing is another.",
            Self::Simile => "A comparison using \"like\" or \"as\".",
            Self::Personification => "Giving human actions or feelings to a non-human thing.",
            Self::Hyperbole => "Deliberate exaggeration for emphasis.",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single literary device match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LiteraryDevice {
    /// Which device matched.
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    /// The matched text.
    pub example: String,
    /// Why this counts as the device.
    pub explanation: String,
}

impl LiteraryDevice {
    pub(crate) fn new(kind: DeviceKind, example: &str) -> Self {
        Self {
            kind,
            example: example.to_string(),
            explanation: kind.explanation().to_string(),
        }
    }
}

// -- Overused Words ---------------------------------------------------------

/// Overused word detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OverusedWordsReport {
    /// A word is overused once it appears more than this many times.
    pub threshold: usize,
    /// Overused words in the order they crossed the threshold.
    pub overused_words: Vec<OverusedWord>,
}

/// An overused word with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OverusedWord {
    /// The word, lowercased.
    pub word: String,
    /// Total occurrences in the text.
    pub count: usize,
}

// -- Show, Don't Tell -------------------------------------------------------

/// Show/don't-tell measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShowTellReport {
    /// `max(0, 1 - telling_word_count / total_words)`; 1 for empty text.
    pub score: f64,
    /// Sentences containing at least one telling word, trimmed.
    pub telling_sentences: Vec<String>,
    /// Telling words across the whole text.
    pub telling_word_count: usize,
    /// All words in the text.
    pub total_words: usize,
}

// -- Sentence Variety -------------------------------------------------------

/// Sentence structure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SentenceType {
    /// No coordinating or subordinating link.
    Simple,
    /// Coordinating conjunction only.
    Compound,
    /// Subordinating conjunction or relative pronoun only.
    Complex,
    /// Both.
    CompoundComplex,
}

/// Sentence length buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LengthDistribution {
    /// Sentences of 10 words or fewer.
    pub short: usize,
    /// Sentences of 11 to 20 words.
    pub medium: usize,
    /// Sentences of more than 20 words.
    pub long: usize,
}

/// Sentence structure counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeDistribution {
    /// Simple sentences.
    pub simple: usize,
    /// Compound sentences.
    pub compound: usize,
    /// Complex sentences.
    pub complex: usize,
    /// Compound-complex sentences.
    #[serde(rename = "compoundComplex")]
    pub compound_complex: usize,
}

impl TypeDistribution {
    /// Sum across all four categories.
    pub const fn total(&self) -> usize {
        self.simple + self.compound + self.complex + self.compound_complex
    }
}

/// Sentence variety analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceVarietyAnalysis {
    /// Non-empty sentences analyzed.
    pub total_sentences: usize,
    /// Words per sentence (0 when there are no sentences).
    pub average_sentence_length: f64,
    /// Counts by length bucket.
    pub sentence_length_distribution: LengthDistribution,
    /// Counts by structure.
    pub sentence_type_distribution: TypeDistribution,
}
