//! Unified error types for the domain layer
//!
//! Provides a common error type for value-object construction and entity
//! rules, so adapters never have to fall back to `String` errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A link could not be parsed as an absolute URL with a host
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a field is empty where it must not be, or a value is
    /// outside its allowed range.
    ///
    /// # Example
    /// ```ignore
    /// if content.trim().is_empty() {
    ///     return Err(DomainError::validation("Post content cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Whether this error was caused by a malformed link.
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("content cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: content cannot be empty");
    }

    #[test]
    fn test_invalid_url_error() {
        let err = DomainError::invalid_url("not-a-url", "relative URL without a base");
        assert!(err.is_invalid_url());
        assert_eq!(
            err.to_string(),
            "Invalid URL 'not-a-url': relative URL without a base"
        );
    }

    #[test]
    fn test_parse_error_is_not_invalid_url() {
        let err = DomainError::parse("bad timestamp");
        assert!(!err.is_invalid_url());
        assert_eq!(err.to_string(), "Parse error: bad timestamp");
    }
}
