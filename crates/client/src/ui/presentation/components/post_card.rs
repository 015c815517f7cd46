//! Post Card - one post in the feed or on a profile

use dioxus::prelude::*;
use linkfeed_domain::{hostname_or_raw, truncate_to_limit, Post};

use crate::application::now;
use crate::presentation::components::PostMenu;
use crate::presentation::helpers::format_relative_time;
use crate::presentation::services::use_post_service;
use crate::presentation::state::{FeedState, SessionState};
use crate::ui::{use_platform, View};

/// Props for PostCard
#[derive(Props, Clone, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
}

#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    let post_service = use_post_service();
    let platform = use_platform();
    let session_state = use_context::<SessionState>();
    let mut feed_state = use_context::<FeedState>();
    let mut view = use_context::<Signal<View>>();

    let mut is_editing = use_signal(|| false);
    let mut draft = use_signal(|| props.post.content.clone());

    let post = props.post;
    let is_owner = session_state.is_current(&post.user_id);
    let age = format_relative_time(post.created_at, now(platform.as_ref()));
    let host = hostname_or_raw(&post.url);
    let avatar = post.user.display_avatar();

    let like = {
        let svc = post_service.clone();
        let platform = platform.clone();
        let id = post.id.clone();
        move |_| {
            let svc = svc.clone();
            let platform = platform.clone();
            let id = id.clone();
            spawn(async move {
                match svc.like_post(&id).await {
                    Ok(()) => feed_state.refresh(&svc).await,
                    Err(e) => platform.log_error(&format!("Like failed: {e}")),
                }
            });
        }
    };

    let save_edit = {
        let svc = post_service.clone();
        let id = post.id.clone();
        move |_| {
            let svc = svc.clone();
            let platform = platform.clone();
            let id = id.clone();
            let content = draft.read().clone();
            spawn(async move {
                match svc.update_post(&id, &content).await {
                    Ok(()) => {
                        is_editing.set(false);
                        feed_state.refresh(&svc).await;
                    }
                    Err(e) => platform.log_error(&format!("Update failed: {e}")),
                }
            });
        }
    };

    let author_id = post.user_id.clone();
    let original_content = post.content.clone();

    rsx! {
        article {
            class: "card",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    style: "display: flex; gap: 0.75rem; align-items: center; cursor: pointer;",
                    onclick: move |_| view.set(View::Profile(Some(author_id.clone()))),
                    img { class: "avatar", src: "{avatar}", alt: "{post.user.name}" }
                    div {
                        div { style: "font-weight: 600;", "{post.user.name}" }
                        div { class: "muted", "{age}" }
                    }
                }
                if is_owner {
                    PostMenu {
                        post_id: post.id.clone(),
                        on_edit: move |_| {
                            draft.set(original_content.clone());
                            is_editing.set(true);
                        },
                    }
                }
            }

            if *is_editing.read() {
                div {
                    style: "display: flex; flex-direction: column; gap: 0.5rem; margin: 0.75rem 0;",
                    textarea {
                        rows: 3,
                        value: "{draft}",
                        oninput: move |e| draft.set(truncate_to_limit(&e.value())),
                    }
                    div {
                        style: "display: flex; gap: 0.5rem;",
                        button { onclick: save_edit, "Save" }
                        button { onclick: move |_| is_editing.set(false), "Cancel" }
                    }
                }
            } else {
                p { style: "white-space: pre-wrap;", "{post.content}" }
            }

            a {
                href: "{post.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                style: "display: block; background: #f9fafb; border-radius: 0.5rem; padding: 0.75rem; text-decoration: none;",
                div { class: "muted", "{host}" }
                div { style: "color: #2563eb; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{post.url}" }
            }

            div {
                style: "display: flex; gap: 1.5rem; margin-top: 0.75rem;",
                button {
                    style: if post.is_liked { "color: #ef4444;" } else { "color: #4b5563;" },
                    onclick: like,
                    if post.is_liked { "♥ {post.likes}" } else { "♡ {post.likes}" }
                }
                span { class: "muted", "💬 {post.comments}" }
                span { class: "muted", "{post.platform}" }
            }
        }
    }
}
