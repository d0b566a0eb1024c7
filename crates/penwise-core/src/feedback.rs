//! Feedback with a heuristic fallback.
//!
//! An external [`FeedbackProvider`] (for example a hosted language model)
//! may produce richer feedback. Whenever it is absent, fails, or answers
//! with blank text, the local coaching engine answers instead.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::analyze_text;
use crate::coaching::{
    DEFAULT_TARGET_WORDS, NswCoachingResponse, compose_coaching_response_with_target,
};
use crate::error::FeedbackError;
use crate::vocabulary::TextType;

/// Everything a provider or the fallback needs to respond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackRequest {
    /// The student's writing.
    pub content: String,
    /// Genre of the writing.
    pub text_type: TextType,
    /// Seconds since the practice session started.
    pub elapsed_secs: u64,
    /// Exam word target.
    pub target_words: usize,
}

impl FeedbackRequest {
    /// Request with the default word target.
    pub fn new(content: impl Into<String>, text_type: TextType, elapsed_secs: u64) -> Self {
        Self {
            content: content.into(),
            text_type,
            elapsed_secs,
            target_words: DEFAULT_TARGET_WORDS,
        }
    }
}

/// A source of free-text feedback outside this crate.
pub trait FeedbackProvider {
    /// Produce feedback as plain text.
    fn feedback(&self, request: &FeedbackRequest) -> Result<String, FeedbackError>;
}

/// Where feedback came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "source", content = "feedback", rename_all = "lowercase")]
pub enum Feedback {
    /// Text returned by a provider.
    Model(String),
    /// Locally composed coaching.
    Heuristic(NswCoachingResponse),
}

/// Ask `provider` for feedback, falling back to local coaching.
///
/// Provider errors are logged and swallowed.
#[tracing::instrument(skip_all, fields(has_provider = provider.is_some(), text_type = %request.text_type))]
pub fn feedback_or_fallback(
    provider: Option<&dyn FeedbackProvider>,
    request: &FeedbackRequest,
) -> Feedback {
    if let Some(provider) = provider {
        match provider.feedback(request) {
            Ok(text) if !text.trim().is_empty() => return Feedback::Model(text),
            Ok(_) => tracing::warn!("feedback provider returned blank text, using local coaching"),
            Err(e) => tracing::warn!(error = %e, "feedback provider failed, using local coaching"),
        }
    }
    Feedback::Heuristic(heuristic_feedback(request))
}

/// Local coaching for a request.
pub fn heuristic_feedback(request: &FeedbackRequest) -> NswCoachingResponse {
    let analysis = analyze_text(&request.content);
    compose_coaching_response_with_target(
        request.text_type,
        &analysis,
        analysis.word_count,
        request.elapsed_secs,
        request.target_words,
    )
}
