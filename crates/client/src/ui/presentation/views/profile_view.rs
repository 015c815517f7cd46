//! Profile View - header card plus the user's posts

use dioxus::prelude::*;
use linkfeed_domain::UserId;

use crate::application::services::Profile;
use crate::presentation::components::PostCard;
use crate::presentation::helpers::format_joined;
use crate::presentation::services::use_profile_service;
use crate::presentation::state::{FeedState, SessionState};
use crate::ui::use_platform;

/// Props for ProfileView
#[derive(Props, Clone, PartialEq)]
pub struct ProfileViewProps {
    /// `None` shows the signed-in identity's own profile
    #[props(!optional)]
    pub user_id: Option<UserId>,
}

#[component]
pub fn ProfileView(props: ProfileViewProps) -> Element {
    let profile_service = use_profile_service();
    let platform = use_platform();
    let session_state = use_context::<SessionState>();
    let feed_state = use_context::<FeedState>();
    let mut is_following = use_signal(|| false);
    let target_id = props.user_id;

    // Re-runs when the session or the feed changes. The parent keys this
    // view by target, so a new target remounts it.
    let profile = use_resource(move || {
        let svc = profile_service.clone();
        let platform = platform.clone();
        let target = target_id.clone();
        let _ = session_state.identity.read();
        let _ = feed_state.posts.read();
        async move {
            match svc.profile(target.as_ref()).await {
                Ok(profile) => profile,
                Err(e) => {
                    platform.log_error(&format!("Failed to load profile: {e}"));
                    None
                }
            }
        }
    });

    let loaded: Option<Option<Profile>> = profile.read().clone();

    rsx! {
        main {
            class: "main",
            match loaded {
                None => rsx! { p { class: "muted", "Loading..." } },
                Some(None) => rsx! {
                    div {
                        class: "card muted",
                        style: "text-align: center;",
                        "User not found"
                    }
                },
                Some(Some(profile)) => rsx! {
                    div {
                        class: "card",
                        div {
                            style: "display: flex; justify-content: space-between; align-items: flex-start;",
                            img {
                                class: "avatar",
                                style: "width: 6rem; height: 6rem;",
                                src: "{profile.avatar}",
                                alt: "{profile.identity.name}",
                            }
                            if profile.is_own {
                                button { disabled: true, "Edit profile" }
                            } else {
                                button {
                                    onclick: move |_| {
                                        let following = *is_following.read();
                                        is_following.set(!following);
                                    },
                                    if *is_following.read() { "Following" } else { "Follow" }
                                }
                            }
                        }
                        h1 { style: "margin: 0.75rem 0 0; font-size: 1.5rem;", "{profile.identity.name}" }
                        p { class: "muted", style: "margin: 0;", "{profile.handle}" }
                        if let Some(bio) = profile.identity.bio.as_ref() {
                            p { "{bio}" }
                        }
                        div {
                            class: "muted",
                            style: "display: flex; flex-wrap: wrap; gap: 1rem;",
                            if let Some(location) = profile.identity.location.as_ref() {
                                span { "{location}" }
                            }
                            if let (Some(website), Some(host)) = (profile.identity.website.as_ref(), profile.website_host.as_ref()) {
                                a { href: "{website}", target: "_blank", rel: "noopener noreferrer", "{host}" }
                            }
                            span { "{format_joined(profile.identity.joined_at)}" }
                        }
                    }

                    if profile.posts.is_empty() {
                        div {
                            class: "card muted",
                            style: "text-align: center;",
                            "No posts yet"
                        }
                    }
                    for post in profile.posts.iter() {
                        PostCard { key: "{post.id}", post: post.clone() }
                    }
                },
            }
        }
    }
}
