//! Reactive UI state, provided through Dioxus context

mod feed_state;
mod session_state;

pub use feed_state::FeedState;
pub use session_state::SessionState;
