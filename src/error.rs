//! Error types for hilite

use thiserror::Error;

/// Result type alias for hilite operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
///
/// Only profile construction, registration and configuration can fail.
/// Highlighting itself is total: unknown languages fall back to the generic
/// profile and out-of-range line queries return an empty result.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("span delimiter of rule '{rule}' matches the empty string")]
    EmptyDelimiter { rule: String },

    #[error("profile already registered: {0}")]
    DuplicateProfile(String),

    #[error("no such profile: {0}")]
    UnknownProfile(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
