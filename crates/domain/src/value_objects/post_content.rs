//! Post content length rules.
//!
//! Lengths are measured in UTF-16 code units, which is what the browser's
//! `maxlength` attribute counts. The post store does not re-check these; they
//! back the compose form.

use crate::error::DomainError;

/// Maximum post length in UTF-16 code units.
pub const MAX_POST_CONTENT_UNITS: usize = 280;

/// Length of `text` in UTF-16 code units.
///
/// ```
/// use linkfeed_domain::content_units;
///
/// assert_eq!(content_units("abc"), 3);
/// assert_eq!(content_units("日本"), 2);
/// assert_eq!(content_units("🎉"), 2); // outside the BMP: a surrogate pair
/// ```
pub fn content_units(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Units left before the limit; negative once the text is too long.
pub fn remaining_units(text: &str) -> i64 {
    MAX_POST_CONTENT_UNITS as i64 - content_units(text) as i64
}

/// Whether `text` is longer than [`MAX_POST_CONTENT_UNITS`].
pub fn exceeds_limit(text: &str) -> bool {
    content_units(text) > MAX_POST_CONTENT_UNITS
}

/// Cut `text` to at most [`MAX_POST_CONTENT_UNITS`] units without splitting
/// a character.
pub fn truncate_to_limit(text: &str) -> String {
    let mut used = 0;
    let mut out = String::with_capacity(text.len().min(MAX_POST_CONTENT_UNITS * 4));
    for ch in text.chars() {
        used += ch.len_utf16();
        if used > MAX_POST_CONTENT_UNITS {
            break;
        }
        out.push(ch);
    }
    out
}

/// Validate compose-form content: required and within the limit.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the content is blank or too long.
pub fn validate_post_content(text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::validation("Post content cannot be empty"));
    }
    if exceeds_limit(text) {
        return Err(DomainError::validation(format!(
            "Post content cannot exceed {} characters",
            MAX_POST_CONTENT_UNITS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_down_and_goes_negative() {
        assert_eq!(remaining_units(""), 280);
        assert_eq!(remaining_units(&"a".repeat(280)), 0);
        assert_eq!(remaining_units(&"a".repeat(281)), -1);
    }

    #[test]
    fn limit_is_inclusive() {
        assert!(!exceeds_limit(&"x".repeat(280)));
        assert!(exceeds_limit(&"x".repeat(281)));
    }

    #[test]
    fn surrogate_pairs_count_double() {
        let text = "🎉".repeat(140);
        assert_eq!(content_units(&text), 280);
        assert!(!exceeds_limit(&text));
        assert!(exceeds_limit(&format!("{text}a")));
    }

    #[test]
    fn truncate_never_splits_a_pair() {
        let text = format!("{}🎉", "a".repeat(279));
        let cut = truncate_to_limit(&text);
        assert_eq!(cut, "a".repeat(279));
        assert_eq!(truncate_to_limit("short"), "short");
    }

    #[test]
    fn validation_rejects_blank_and_long_content() {
        assert!(validate_post_content("hello").is_ok());
        assert!(matches!(
            validate_post_content("  \n"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            validate_post_content(&"y".repeat(281)),
            Err(DomainError::Validation(_))
        ));
    }
}
