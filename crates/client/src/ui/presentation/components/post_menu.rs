//! Post Menu - owner-only actions on a post

use dioxus::prelude::*;
use linkfeed_domain::PostId;

use crate::presentation::services::use_post_service;
use crate::presentation::state::FeedState;
use crate::ui::use_platform;

/// Props for PostMenu
#[derive(Props, Clone, PartialEq)]
pub struct PostMenuProps {
    pub post_id: PostId,
    pub on_edit: EventHandler<()>,
}

#[component]
pub fn PostMenu(props: PostMenuProps) -> Element {
    let post_service = use_post_service();
    let platform = use_platform();
    let mut feed_state = use_context::<FeedState>();
    let mut is_open = use_signal(|| false);

    let delete = {
        let id = props.post_id.clone();
        move |_| {
            let svc = post_service.clone();
            let platform = platform.clone();
            let id = id.clone();
            spawn(async move {
                match svc.delete_post(&id).await {
                    Ok(()) => feed_state.refresh(&svc).await,
                    Err(e) => platform.log_error(&format!("Failed to delete post: {e}")),
                }
                is_open.set(false);
            });
        }
    };

    rsx! {
        div {
            style: "position: relative;",
            button {
                style: "background: none; border: 0; font-size: 1.25rem;",
                onclick: move |_| {
                    let open = *is_open.read();
                    is_open.set(!open);
                },
                "⋮"
            }

            if *is_open.read() {
                div {
                    class: "card",
                    style: "position: absolute; right: 0; z-index: 10; display: flex; flex-direction: column; gap: 0.25rem;",
                    button {
                        onclick: move |_| {
                            is_open.set(false);
                            props.on_edit.call(());
                        },
                        "Edit"
                    }
                    button {
                        style: "color: #dc2626;",
                        onclick: delete,
                        "Delete"
                    }
                }
            }
        }
    }
}
