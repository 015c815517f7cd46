mod identity;
mod post;

pub use identity::Identity;
pub use post::{Post, PostAuthor};
