//! Identity entity - the logged-in user record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{
    deserialize_optional_text, deserialize_timestamp_or_date, some_if_not_empty,
};
use crate::value_objects::{generated_avatar_url, PostLink};
use crate::UserId;

/// A user identity.
///
/// Serialized with camelCase keys; this is also the persisted session format.
/// Optional profile fields are omitted when unset, and read back as unset
/// when stored as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    /// Display name
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_text"
    )]
    pub avatar: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_text"
    )]
    pub bio: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_text"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_text"
    )]
    pub website: Option<String>,
    /// Older records store a bare date here
    #[serde(deserialize_with = "deserialize_timestamp_or_date")]
    pub joined_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        name: impl Into<String>,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            avatar: None,
            bio: None,
            location: None,
            website: None,
            joined_at,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = some_if_not_empty(avatar.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = some_if_not_empty(bio.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = some_if_not_empty(location.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = some_if_not_empty(website.into());
        self
    }

    /// The stored avatar, or one generated from the display name.
    pub fn display_avatar(&self) -> String {
        self.avatar
            .clone()
            .unwrap_or_else(|| generated_avatar_url(&self.name))
    }

    /// `@handle` shown under the display name: lowercased, whitespace removed.
    pub fn handle(&self) -> String {
        let compact: String = self
            .name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("@{compact}")
    }

    /// Hostname of the website, when one is set and parses.
    pub fn website_hostname(&self) -> Option<String> {
        let website = self.website.as_deref()?;
        PostLink::parse(website)
            .ok()
            .map(|link| link.hostname().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::date_at_midnight;

    fn ann() -> Identity {
        Identity::new(
            UserId::new("current-user"),
            "a@x.com",
            "Ann Lee",
            date_at_midnight(2024, 1, 15),
        )
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let identity = ann().with_bio("").with_location("").with_website("");
        assert_eq!(identity.bio, None);
        assert_eq!(identity.location, None);
        assert_eq!(identity.website, None);
    }

    #[test]
    fn display_avatar_falls_back_to_generated_url() {
        assert_eq!(
            ann().display_avatar(),
            "https://ui-avatars.com/api/?name=Ann+Lee&background=random"
        );
        let with_avatar = ann().with_avatar("https://cdn.example.com/ann.png");
        assert_eq!(with_avatar.display_avatar(), "https://cdn.example.com/ann.png");
    }

    #[test]
    fn handle_is_lowercase_without_whitespace() {
        assert_eq!(ann().handle(), "@annlee");
    }

    #[test]
    fn website_hostname_only_for_parseable_sites() {
        let identity = ann().with_website("https://example.com/suzuki");
        assert_eq!(identity.website_hostname().as_deref(), Some("example.com"));
        assert_eq!(ann().with_website("not a site").website_hostname(), None);
        assert_eq!(ann().website_hostname(), None);
    }

    #[test]
    fn serializes_with_camel_case_keys_and_omits_unset_fields() {
        let json = serde_json::to_value(ann().with_location("Osaka")).unwrap();
        assert_eq!(json["id"], "current-user");
        assert_eq!(json["location"], "Osaka");
        assert_eq!(json["joinedAt"], "2024-01-15T00:00:00Z");
        assert!(json.get("bio").is_none());
        assert!(json.get("joined_at").is_none());
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{"id":"u","email":"e@x.com","name":"E","joinedAt":"2024-03-01T08:00:00Z"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.avatar, None);
        assert_eq!(identity.name, "E");
    }

    #[test]
    fn reads_records_with_bare_dates_and_empty_fields() {
        let json = r#"{
            "id": "current-user",
            "email": "ann@x.com",
            "name": "Ann",
            "bio": "",
            "location": "",
            "website": "",
            "joinedAt": "2024-01-15",
            "avatar": "https://ui-avatars.com/api/?name=Ann&background=random"
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.joined_at, date_at_midnight(2024, 1, 15));
        assert_eq!((identity.bio, identity.location, identity.website), (None, None, None));
        assert!(identity.avatar.is_some());
    }

    #[test]
    fn rejects_unparseable_join_date() {
        let json = r#"{"id":"u","email":"e","name":"E","joinedAt":"someday"}"#;
        assert!(serde_json::from_str::<Identity>(json).is_err());
    }
}
