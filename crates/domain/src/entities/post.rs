//! Post entity - a shared link with commentary and engagement counters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{generated_avatar_url, PostLink};
use crate::{Identity, PostId, UserId};

/// Author details copied onto a post when it is created.
///
/// This is a snapshot: later changes to the identity do not reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl PostAuthor {
    pub fn snapshot(identity: &Identity) -> Self {
        Self {
            name: identity.name.clone(),
            avatar: identity.avatar.clone(),
        }
    }

    /// The snapshot avatar, or one generated from the name.
    pub fn display_avatar(&self) -> String {
        self.avatar
            .clone()
            .unwrap_or_else(|| generated_avatar_url(&self.name))
    }
}

/// A post in the feed.
///
/// `is_liked` is a single per-viewer flag, so the model cannot tell which of
/// several viewers liked a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub url: String,
    /// Platform label; the link hostname for posts created here
    pub platform: String,
    pub likes: u32,
    pub comments: u32,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub user: PostAuthor,
}

impl Post {
    /// A fresh post by `author`: no likes, no comments, not liked.
    pub fn new(
        id: PostId,
        author: &Identity,
        content: impl Into<String>,
        link: PostLink,
        created_at: DateTime<Utc>,
    ) -> Self {
        let (url, platform) = link.into_parts();
        Self {
            id,
            user_id: author.id.clone(),
            content: content.into(),
            url,
            platform,
            likes: 0,
            comments: 0,
            is_liked: false,
            created_at,
            user: PostAuthor::snapshot(author),
        }
    }

    /// Override the platform label (seed posts carry brand names).
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_engagement(mut self, likes: u32, comments: u32, is_liked: bool) -> Self {
        self.likes = likes;
        self.comments = comments;
        self.is_liked = is_liked;
        self
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Flip the liked flag and move the count with it.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes = self.likes.saturating_add(1);
        }
        self.is_liked = !self.is_liked;
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::date_at_midnight;

    fn author() -> Identity {
        Identity::new(
            UserId::new("current-user"),
            "a@x.com",
            "Ann",
            date_at_midnight(2024, 1, 15),
        )
        .with_avatar("https://cdn.example.com/ann.png")
    }

    fn post() -> Post {
        Post::new(
            PostId::from_millis(1_000),
            &author(),
            "hello",
            PostLink::parse("https://ex.com/a").unwrap(),
            date_at_midnight(2024, 6, 1),
        )
    }

    #[test]
    fn new_post_starts_without_engagement() {
        let post = post();
        assert_eq!(post.user_id, UserId::new("current-user"));
        assert_eq!(post.url, "https://ex.com/a");
        assert_eq!(post.platform, "ex.com");
        assert_eq!((post.likes, post.comments, post.is_liked), (0, 0, false));
        assert_eq!(post.user.name, "Ann");
        assert_eq!(
            post.user.avatar.as_deref(),
            Some("https://cdn.example.com/ann.png")
        );
    }

    #[test]
    fn toggle_like_twice_restores_state() {
        let mut post = post().with_engagement(41, 2, false);
        post.toggle_like();
        assert_eq!((post.likes, post.is_liked), (42, true));
        post.toggle_like();
        assert_eq!((post.likes, post.is_liked), (41, false));
    }

    #[test]
    fn unlike_at_zero_does_not_underflow() {
        let mut post = post().with_engagement(0, 0, true);
        post.toggle_like();
        assert_eq!((post.likes, post.is_liked), (0, false));
    }

    #[test]
    fn author_snapshot_is_detached_from_identity() {
        let mut identity = author();
        let post = Post::new(
            PostId::from_millis(2_000),
            &identity,
            "x",
            PostLink::parse("https://ex.com").unwrap(),
            date_at_midnight(2024, 6, 1),
        );
        identity.name = "Renamed".to_string();
        assert_eq!(post.user.name, "Ann");
    }

    #[test]
    fn author_without_avatar_gets_generated_one() {
        let author = PostAuthor {
            name: "Ann".to_string(),
            avatar: None,
        };
        assert_eq!(
            author.display_avatar(),
            "https://ui-avatars.com/api/?name=Ann&background=random"
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(post()).unwrap();
        assert_eq!(json["userId"], "current-user");
        assert_eq!(json["isLiked"], false);
        assert_eq!(json["user"]["name"], "Ann");
    }
}
