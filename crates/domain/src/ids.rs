use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Identity IDs
define_id!(UserId);

// Post IDs
define_id!(PostId);

impl PostId {
    /// Post ID derived from a creation timestamp in epoch milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.to_string())
    }

    /// The numeric value of a timestamp-derived ID, if it is one.
    pub fn as_millis(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_id_round_trips_millis() {
        let id = PostId::from_millis(1_718_000_000_123);
        assert_eq!(id.as_str(), "1718000000123");
        assert_eq!(id.as_millis(), Some(1_718_000_000_123));
    }

    #[test]
    fn non_numeric_post_id_has_no_millis() {
        assert_eq!(PostId::new("seed-a").as_millis(), None);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&UserId::new("current-user")).unwrap();
        assert_eq!(json, "\"current-user\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserId::from("current-user"));
    }
}
