//! String conversion utilities.

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// Profile fields arrive from forms as possibly-empty strings; an empty one
/// means "not set".
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Serde `deserialize_with` helper for optional text fields where an empty
/// string means unset. Pair with `#[serde(default)]`.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(raw.and_then(some_if_not_empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_some_if_not_empty() {
        assert_eq!(
            some_if_not_empty("Osaka".to_string()),
            Some("Osaka".to_string())
        );
        assert_eq!(some_if_not_empty(String::new()), None);
        // Whitespace is not empty
        assert_eq!(some_if_not_empty(" ".to_string()), Some(" ".to_string()));
    }
}
