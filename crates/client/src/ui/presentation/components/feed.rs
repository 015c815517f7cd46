//! Feed - composer plus the list of posts

use dioxus::prelude::*;

use crate::presentation::components::{CreatePost, PostCard};
use crate::presentation::services::use_post_service;
use crate::presentation::state::{FeedState, SessionState};

#[component]
pub fn Feed() -> Element {
    let post_service = use_post_service();
    let session_state = use_context::<SessionState>();
    let mut feed_state = use_context::<FeedState>();

    // Load once on mount
    use_hook(move || {
        feed_state.is_loading.set(true);
        spawn(async move {
            feed_state.refresh(&post_service).await;
            feed_state.is_loading.set(false);
        });
    });

    let posts = feed_state.posts.read().clone();

    rsx! {
        main {
            class: "main",

            if session_state.is_authenticated() {
                CreatePost {}
            }

            if let Some(err) = feed_state.error.read().as_ref() {
                p { class: "error", "{err}" }
            }

            for post in posts.iter() {
                PostCard { key: "{post.id}", post: post.clone() }
            }

            if posts.is_empty() && !*feed_state.is_loading.read() {
                div {
                    class: "card muted",
                    style: "text-align: center;",
                    "No posts yet"
                }
            }
        }
    }
}
