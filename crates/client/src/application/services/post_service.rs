//! Post Service - mutations over the ordered post collection
//!
//! Creating a post is the only operation with a real failure mode (a link
//! that does not parse). Update, delete and like are no-ops for unknown IDs.
//! A failed call never changes the collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use linkfeed_domain::{Post, PostId, PostLink, UserId};

use crate::application::services::SessionService;
use crate::application::{now, ServiceError};
use crate::ports::outbound::{PlatformPort, PostRepository};

/// Post store operations
pub struct PostService {
    repository: Arc<dyn PostRepository>,
    session: Arc<SessionService>,
    platform: Arc<dyn PlatformPort>,
    last_issued_id: AtomicU64,
}

impl PostService {
    pub fn new(
        repository: Arc<dyn PostRepository>,
        session: Arc<SessionService>,
        platform: Arc<dyn PlatformPort>,
    ) -> Self {
        Self {
            repository,
            session,
            platform,
            last_issued_id: AtomicU64::new(0),
        }
    }

    /// The feed, newest first
    pub async fn list_posts(&self) -> Result<Vec<Post>, ServiceError> {
        self.repository.list().await
    }

    /// Posts written by `user_id`, in feed order
    pub async fn posts_by_user(&self, user_id: &UserId) -> Result<Vec<Post>, ServiceError> {
        let posts = self.repository.list().await?;
        Ok(posts
            .into_iter()
            .filter(|post| post.is_authored_by(user_id))
            .collect())
    }

    /// Share a link as the current identity.
    ///
    /// # Errors
    ///
    /// - `ServiceError::InvalidUrl` if `url` is not an absolute URL with a host
    /// - `ServiceError::NotAuthenticated` if nobody is signed in
    pub async fn create_post(&self, content: &str, url: &str) -> Result<Post, ServiceError> {
        let link = PostLink::parse(url)?;
        let author = self
            .session
            .current()
            .ok_or(ServiceError::NotAuthenticated)?;

        let post = Post::new(
            self.next_id(),
            &author,
            content,
            link,
            now(self.platform.as_ref()),
        );
        self.repository.prepend(post.clone()).await?;

        tracing::info!(
            post_id = %post.id,
            user_id = %post.user_id,
            platform = %post.platform,
            "Post created"
        );
        Ok(post)
    }

    /// Replace the content of a post.
    pub async fn update_post(&self, id: &PostId, content: &str) -> Result<(), ServiceError> {
        let Some(mut post) = self.repository.get(id).await? else {
            tracing::debug!(post_id = %id, "Update skipped: no such post");
            return Ok(());
        };

        post.set_content(content);
        self.repository.save(post).await?;
        tracing::info!(post_id = %id, "Post updated");
        Ok(())
    }

    pub async fn delete_post(&self, id: &PostId) -> Result<(), ServiceError> {
        if self.repository.delete(id).await? {
            tracing::info!(post_id = %id, "Post deleted");
        } else {
            tracing::debug!(post_id = %id, "Delete skipped: no such post");
        }
        Ok(())
    }

    /// Toggle the viewer's like on a post.
    pub async fn like_post(&self, id: &PostId) -> Result<(), ServiceError> {
        let Some(mut post) = self.repository.get(id).await? else {
            tracing::debug!(post_id = %id, "Like skipped: no such post");
            return Ok(());
        };

        post.toggle_like();
        let (likes, liked) = (post.likes, post.is_liked);
        self.repository.save(post).await?;
        tracing::info!(post_id = %id, likes, liked, "Like toggled");
        Ok(())
    }

    /// Creation-time ID, bumped past the last one issued so IDs stay unique
    /// when the clock has not moved.
    fn next_id(&self) -> PostId {
        let now = self.platform.now_millis();
        let previous = self
            .last_issued_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        PostId::from_millis(now.max(previous.saturating_add(1)))
    }
}
