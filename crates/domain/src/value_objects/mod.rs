//! Value objects for the Linkfeed domain
//!
//! Value objects are immutable and compared by value. The link type validates
//! on construction; the content helpers are free functions because the post
//! store itself accepts any string.

mod avatar;
mod link;
mod post_content;

pub use avatar::{generated_avatar_url, AVATAR_SERVICE_URL};
pub use link::{hostname_or_raw, PostLink};
pub use post_content::{
    content_units, exceeds_limit, remaining_units, truncate_to_limit, validate_post_content,
    MAX_POST_CONTENT_UNITS,
};
