pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{Identity, Post, PostAuthor};

pub use error::DomainError;

// Re-export ID types
pub use ids::{PostId, UserId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    content_units, exceeds_limit, generated_avatar_url, hostname_or_raw, remaining_units,
    truncate_to_limit, validate_post_content, PostLink, AVATAR_SERVICE_URL,
    MAX_POST_CONTENT_UNITS,
};
