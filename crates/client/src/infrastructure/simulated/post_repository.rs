//! In-memory post repository

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use linkfeed_domain::{Post, PostId};

use crate::application::ServiceError;
use crate::ports::outbound::PostRepository;

/// Posts held in feed order, newest first
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Post>>, ServiceError> {
        self.posts
            .read()
            .map_err(|_| ServiceError::backend("post store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Post>>, ServiceError> {
        self.posts
            .write()
            .map_err(|_| ServiceError::backend("post store lock poisoned"))
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, ServiceError> {
        Ok(self.read()?.clone())
    }

    async fn get(&self, id: &PostId) -> Result<Option<Post>, ServiceError> {
        Ok(self.read()?.iter().find(|post| &post.id == id).cloned())
    }

    async fn prepend(&self, post: Post) -> Result<(), ServiceError> {
        self.write()?.insert(0, post);
        Ok(())
    }

    async fn save(&self, post: Post) -> Result<bool, ServiceError> {
        let mut posts = self.write()?;
        match posts.iter_mut().find(|existing| existing.id == post.id) {
            Some(slot) => {
                *slot = post;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<bool, ServiceError> {
        let mut posts = self.write()?;
        let before = posts.len();
        posts.retain(|post| &post.id != id);
        Ok(posts.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::simulated::seed_posts;
    use chrono::Utc;

    fn seeded() -> InMemoryPostRepository {
        InMemoryPostRepository::with_posts(seed_posts(Utc::now()))
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn prepend_puts_post_at_the_front() {
        let repo = seeded();
        let mut post = repo.get(&PostId::new("2")).await.unwrap().unwrap();
        post.id = PostId::new("9");

        repo.prepend(post).await.unwrap();

        assert_eq!(ids(&repo.list().await.unwrap()), vec!["9", "1", "2", "3"]);
    }

    #[tokio::test]
    async fn save_replaces_in_place() {
        let repo = seeded();
        let mut post = repo.get(&PostId::new("2")).await.unwrap().unwrap();
        post.content = "changed".to_string();

        assert!(repo.save(post).await.unwrap());

        let posts = repo.list().await.unwrap();
        assert_eq!(ids(&posts), vec!["1", "2", "3"]);
        assert_eq!(posts[1].content, "changed");
    }

    #[tokio::test]
    async fn save_reports_missing_post() {
        let repo = InMemoryPostRepository::new();
        let mut post = seed_posts(Utc::now()).remove(0);
        post.id = PostId::new("nope");

        assert!(!repo.save(post).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let repo = seeded();
        assert!(repo.delete(&PostId::new("1")).await.unwrap());
        assert!(!repo.delete(&PostId::new("1")).await.unwrap());
        assert_eq!(ids(&repo.list().await.unwrap()), vec!["2", "3"]);
    }
}
