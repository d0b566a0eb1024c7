//! Error types for penwise-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A value parsed but is out of range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Offending config key.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when selecting analysis checks.
///
/// The analyzers themselves never fail on text input; only the
/// orchestration layer can reject a request.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// An unknown check name was requested.
    #[error("unknown check: {name}. Use: {available}")]
    UnknownCheck {
        /// The check name that was requested.
        name: String,
        /// Comma-separated list of available check names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors raised by a [`crate::drafts::DraftStore`].
#[derive(Error, Debug)]
pub enum DraftError {
    /// The draft id contains characters outside `[A-Za-z0-9_-]` or is too long.
    #[error("invalid draft id: {0:?} (use 1-64 letters, digits, '-' or '_')")]
    InvalidId(String),

    /// No draft exists under the given id.
    #[error("draft not found: {0}")]
    NotFound(String),

    /// Reading or writing a draft file failed.
    #[error("draft storage error at {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A stored draft could not be encoded or decoded.
    #[error("malformed draft {path}: {source}")]
    Json {
        /// The file involved.
        path: Utf8PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Result type alias using [`DraftError`].
pub type DraftResult<T> = Result<T, DraftError>;

/// Errors reported by an external [`crate::feedback::FeedbackProvider`].
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// The provider is not configured or cannot be reached.
    #[error("feedback provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered with something unusable.
    #[error("feedback provider returned an invalid response: {0}")]
    InvalidResponse(String),
}
