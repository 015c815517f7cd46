//! Post repository port - owns the ordered post collection.

use async_trait::async_trait;
use linkfeed_domain::{Post, PostId};

use crate::application::ServiceError;

/// Storage for posts, in feed order (newest first).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, front of the feed first
    async fn list(&self) -> Result<Vec<Post>, ServiceError>;

    async fn get(&self, id: &PostId) -> Result<Option<Post>, ServiceError>;

    /// Insert at the front of the feed
    async fn prepend(&self, post: Post) -> Result<(), ServiceError>;

    /// Replace the stored post with the same ID. Returns false if absent.
    async fn save(&self, post: Post) -> Result<bool, ServiceError>;

    /// Remove by ID. Returns false if absent.
    async fn delete(&self, id: &PostId) -> Result<bool, ServiceError>;
}
