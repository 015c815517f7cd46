//! Shared links and their platform label.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DomainError;

/// A link attached to a post: the URL exactly as entered plus the hostname
/// derived from it.
///
/// Construction fails unless the input parses as an absolute URL with a host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostLink {
    raw: String,
    hostname: String,
}

impl PostLink {
    /// Parse a link.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if:
    /// - The input is empty or only whitespace
    /// - The input is not an absolute URL
    /// - The URL has no host (e.g. `mailto:` links)
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::invalid_url(raw, "URL cannot be empty"));
        }

        let parsed = match Url::parse(&raw) {
            Ok(parsed) => parsed,
            Err(e) => return Err(DomainError::invalid_url(raw, e.to_string())),
        };

        let hostname = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(DomainError::invalid_url(raw, "URL has no host")),
        };

        Ok(Self { raw, hostname })
    }

    /// The URL as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased hostname, used as the post's platform label.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn into_parts(self) -> (String, String) {
        (self.raw, self.hostname)
    }
}

impl fmt::Display for PostLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl TryFrom<String> for PostLink {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<PostLink> for String {
    fn from(link: PostLink) -> String {
        link.raw
    }
}

/// Hostname of `raw` for display, or `raw` itself when it does not parse.
///
/// ```
/// use linkfeed_domain::hostname_or_raw;
///
/// assert_eq!(hostname_or_raw("https://www.youtube.com/watch?v=1"), "www.youtube.com");
/// assert_eq!(hostname_or_raw("garbage"), "garbage");
/// ```
pub fn hostname_or_raw(raw: &str) -> String {
    PostLink::parse(raw)
        .map(|link| link.hostname)
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_raw_input_and_derives_hostname() {
        let link = PostLink::parse("https://ex.com/a").unwrap();
        assert_eq!(link.as_str(), "https://ex.com/a");
        assert_eq!(link.hostname(), "ex.com");
    }

    #[test]
    fn hostname_is_lowercased_and_port_dropped() {
        let link = PostLink::parse("http://Blog.Example.COM:8080/post?id=3").unwrap();
        assert_eq!(link.hostname(), "blog.example.com");
        assert_eq!(link.as_str(), "http://Blog.Example.COM:8080/post?id=3");
    }

    #[test]
    fn ipv6_hosts_keep_brackets() {
        let link = PostLink::parse("http://[::1]:3000/").unwrap();
        assert_eq!(link.hostname(), "[::1]");
    }

    #[test]
    fn relative_input_is_rejected() {
        let err = PostLink::parse("not-a-url").unwrap_err();
        assert!(err.is_invalid_url());
    }

    #[test]
    fn empty_and_blank_inputs_are_rejected() {
        assert!(PostLink::parse("").unwrap_err().is_invalid_url());
        assert!(PostLink::parse("   ").unwrap_err().is_invalid_url());
    }

    #[test]
    fn hostless_urls_are_rejected() {
        let err = PostLink::parse("mailto:ann@example.com").unwrap_err();
        match err {
            DomainError::InvalidUrl { url, reason } => {
                assert_eq!(url, "mailto:ann@example.com");
                assert_eq!(reason, "URL has no host");
            }
            other => panic!("Expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn deserialization_validates() {
        let ok: PostLink = serde_json::from_str("\"https://zenn.dev/x\"").unwrap();
        assert_eq!(ok.hostname(), "zenn.dev");
        assert!(serde_json::from_str::<PostLink>("\"nope\"").is_err());
    }
}
