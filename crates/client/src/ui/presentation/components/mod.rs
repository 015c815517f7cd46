//! Reusable UI components

mod auth_form;
mod create_post;
mod feed;
mod navbar;
mod post_card;
mod post_menu;

pub use auth_form::{AuthForm, AuthMode};
pub use create_post::CreatePost;
pub use feed::Feed;
pub use navbar::Navbar;
pub use post_card::PostCard;
pub use post_menu::PostMenu;
