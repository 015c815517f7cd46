//! Service error type shared by application services and ports.

use linkfeed_domain::DomainError;
use thiserror::Error;

/// Errors returned by session, post and profile operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The link could not be parsed as an absolute URL with a host
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The operation needs a signed-in identity
    #[error("Not signed in")]
    NotAuthenticated,

    /// Input rejected by a domain rule
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Persisted state could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backing store failed
    #[error("Backend error: {0}")]
    Backend(String),
}

impl ServiceError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Generic message shown to the user; details go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "Please enter a valid URL, like https://example.com.",
            Self::NotAuthenticated => "Please sign in to continue.",
            Self::Validation(_) => "Please check your input and try again.",
            Self::Serialization(_) | Self::Backend(_) => {
                "Something went wrong. Please try again."
            }
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidUrl { url, reason } => Self::InvalidUrl { url, reason },
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Parse(msg) => Self::Validation(msg),
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
