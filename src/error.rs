//! Unified error types for mailscore.
//!
//! Analyzers never produce errors: missing or empty DOM content is modeled
//! as failing checks. Errors here cover the boundaries of the pipeline —
//! reading input files, the external spam-score call, and report output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mailscore operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MailScoreError {
    /// Errors while loading or decoding the email source
    #[error("Failed to load email: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// Errors from the external spam-score service
    #[error("Spam check failed: {context}")]
    SpamCheck {
        context: String,
        #[source]
        source: SpamCheckErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Unsupported file extension: {extension} (expected .html, .htm or .eml)")]
    UnsupportedExtension { extension: String },

    #[error("No text/html part found in EML content")]
    NoHtmlPart,

    #[error("Empty email source")]
    EmptySource,
}

/// Specific spam-check error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SpamCheckErrorKind {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service returned error status {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Service reported failure: {0}")]
    ServiceFailure(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Message too large: {size} chars (limit {limit})")]
    MessageTooLarge { size: usize, limit: usize },
}

/// Convenient Result type for mailscore operations
pub type Result<T> = std::result::Result<T, MailScoreError>;

impl MailScoreError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create a spam-check error with context
    pub fn spam_check(context: impl Into<String>, source: SpamCheckErrorKind) -> Self {
        Self::SpamCheck {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }
}

impl From<std::io::Error> for MailScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MailScoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(format!("JSON serialization: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MailScoreError::input(
            "reading newsletter.eml",
            InputErrorKind::NoHtmlPart,
        );
        let display = err.to_string();
        assert!(display.contains("newsletter.eml"), "message: {display}");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MailScoreError::io("/path/to/email.html", io_err);
        assert!(err.to_string().contains("/path/to/email.html"));
    }

    #[test]
    fn test_spam_check_error_kinds() {
        let err = MailScoreError::spam_check(
            "POST /filter",
            SpamCheckErrorKind::ServiceError {
                status: 502,
                body: "bad gateway".to_string(),
            },
        );
        assert!(err.to_string().contains("Spam check failed"));
    }
}
