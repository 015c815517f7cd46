//! Seed data for the simulated backend

use chrono::{DateTime, Duration, Utc};
use linkfeed_domain::common::date_at_midnight;
use linkfeed_domain::{Identity, Post, PostAuthor, PostId, UserId};

/// ID shared by every identity the simulated provider issues
pub const DEFAULT_USER_ID: &str = "current-user";

const SUZUKI_AVATAR: &str = "https://images.unsplash.com/photo-1599566150163-29194dcaad36?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const YAMADA_AVATAR: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const SATO_AVATAR: &str = "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

/// The identity a fresh session starts with
pub fn default_identity() -> Identity {
    Identity::new(
        UserId::new(DEFAULT_USER_ID),
        "current@example.com",
        "Ichiro Suzuki",
        date_at_midnight(2024, 1, 15),
    )
    .with_bio("Into web development and AI. I like learning new tech.")
    .with_location("Osaka")
    .with_website("https://example.com/suzuki")
    .with_avatar(SUZUKI_AVATAR)
}

/// Other known users, served by the user directory
pub fn seed_users() -> Vec<Identity> {
    vec![
        Identity::new(
            UserId::new("user-1"),
            "yamada@example.com",
            "Taro Yamada",
            date_at_midnight(2024, 1, 1),
        )
        .with_bio("Sharing news on technology and the economy.")
        .with_location("Tokyo")
        .with_website("https://example.com/yamada")
        .with_avatar(YAMADA_AVATAR),
        Identity::new(
            UserId::new("user-2"),
            "sato@example.com",
            "Hanako Sato",
            date_at_midnight(2024, 2, 1),
        )
        .with_bio("Writing about digital marketing.")
        .with_location("Fukuoka")
        .with_website("https://example.com/sato")
        .with_avatar(SATO_AVATAR),
    ]
}

/// The starting feed, relative to `now`.
///
/// Seed posts carry brand labels rather than hostnames, so they are built
/// directly instead of through `Post::new`.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: PostId::new("1"),
            user_id: UserId::new("user-1"),
            content: "Found an interesting article on how AI is evolving.\n\n\
                      A useful read on how the latest advances will change our daily lives."
                .to_string(),
            url: "https://example.com/ai-article".to_string(),
            platform: "X".to_string(),
            likes: 124,
            comments: 23,
            is_liked: false,
            created_at: now - Duration::hours(2),
            user: PostAuthor {
                name: "Taro Yamada".to_string(),
                avatar: Some(YAMADA_AVATAR.to_string()),
            },
        },
        Post {
            id: PostId::new("2"),
            user_id: UserId::new("user-2"),
            content: "An explainer video on the technology trends everyone is talking about.\n\n\
                      The part on Web3 meeting AI is especially clear."
                .to_string(),
            url: "https://example.com/tech-trends".to_string(),
            platform: "YouTube".to_string(),
            likes: 89,
            comments: 12,
            is_liked: true,
            created_at: now - Duration::hours(3),
            user: PostAuthor {
                name: "Hanako Sato".to_string(),
                avatar: Some(SATO_AVATAR.to_string()),
            },
        },
        Post {
            id: PostId::new("3"),
            user_id: UserId::new(DEFAULT_USER_ID),
            content: "Sharing the latest in web development.\n\n\
                      Hands-on notes about new React features and performance tuning."
                .to_string(),
            url: "https://example.com/web-dev".to_string(),
            platform: "Zenn".to_string(),
            likes: 45,
            comments: 8,
            is_liked: false,
            created_at: now - Duration::hours(1),
            user: PostAuthor {
                name: "Ichiro Suzuki".to_string(),
                avatar: Some(SUZUKI_AVATAR.to_string()),
            },
        },
    ]
}
