//! Feed state using Dioxus signals

use dioxus::prelude::*;
use linkfeed_domain::Post;

use crate::application::services::PostService;

#[derive(Clone, Copy)]
pub struct FeedState {
    /// Posts in feed order, as last read from the post service
    pub posts: Signal<Vec<Post>>,
    pub is_loading: Signal<bool>,
    /// Generic message for the last failed feed operation
    pub error: Signal<Option<String>>,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            posts: Signal::new(Vec::new()),
            is_loading: Signal::new(false),
            error: Signal::new(None),
        }
    }

    /// Re-read the feed from the post service.
    pub async fn refresh(mut self, service: &PostService) {
        match service.list_posts().await {
            Ok(posts) => {
                self.posts.set(posts);
                self.error.set(None);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load feed");
                self.error.set(Some(e.user_message().to_string()));
            }
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}
