//! Core library for penwise.
//!
//! Heuristic writing analysis and coaching for timed exam practice. Every
//! analyzer is a pure function of its input text; there is no hidden state.
//!
//! # Modules
//!
//! - [`analysis`] - Metrics, literary devices, overused words, show/tell, sentence variety
//! - [`vocabulary`] - Text types and per-type word banks
//! - [`grammar`] / [`spelling`] - Surface-level error cues
//! - [`coaching`] - Time- and word-count-aware coaching
//! - [`feedback`] - External feedback with a local fallback
//! - [`similarity`] - Prompt overlap and removal
//! - [`drafts`] - Draft storage behind a trait
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use penwise_core::{TextType, run_full_analysis};
//!
//! let report = run_full_analysis(
//!     "The storm was a monster. Thunder roared like a lion.",
//!     TextType::resolve("narrative"),
//!     None,
//! )
//! .expect("all checks are known");
//!
//! assert_eq!(report.metrics.unwrap().sentence_count, 2);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod coaching;
pub mod config;
pub mod drafts;
pub mod error;
pub mod feedback;
pub mod grammar;
pub mod similarity;
pub mod spelling;
pub mod text;
pub mod vocabulary;
pub mod word_lists;

pub use analysis::{ALL_CHECKS, TextAnalysis, WritingReport, analyze_text, run_full_analysis};
pub use coaching::{NswCoachingResponse, Priority, compose_coaching_response};
pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use drafts::{Draft, DraftStore, FileDraftStore, MemoryDraftStore};
pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, DraftError, DraftResult,
    FeedbackError,
};
pub use feedback::{Feedback, FeedbackProvider, FeedbackRequest, feedback_or_fallback};
pub use vocabulary::TextType;
