//! Create Post - share a link with a short comment

use dioxus::prelude::*;
use linkfeed_domain::{
    content_units, remaining_units, truncate_to_limit, validate_post_content,
    MAX_POST_CONTENT_UNITS,
};

use crate::application::ServiceError;
use crate::presentation::services::use_post_service;
use crate::presentation::state::FeedState;
use crate::ui::use_platform;

#[component]
pub fn CreatePost() -> Element {
    let post_service = use_post_service();
    let platform = use_platform();
    let mut feed_state = use_context::<FeedState>();

    let mut url = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    let mut is_saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let svc = post_service.clone();
        let platform = platform.clone();
        let url_val = url.read().clone();
        let content_val = content.read().clone();

        if let Err(e) = validate_post_content(&content_val) {
            platform.log_warn(&format!("Post content rejected: {e}"));
            error_message.set(Some(ServiceError::from(e).user_message().to_string()));
            return;
        }

        error_message.set(None);
        is_saving.set(true);

        spawn(async move {
            match svc.create_post(&content_val, &url_val).await {
                Ok(_) => {
                    url.set(String::new());
                    content.set(String::new());
                    feed_state.refresh(&svc).await;
                }
                Err(e) => {
                    platform.log_error(&format!("Create post failed: {e}"));
                    error_message.set(Some(e.user_message().to_string()));
                }
            }
            is_saving.set(false);
        });
    };

    let used = content_units(&content.read());
    let nearly_full = remaining_units(&content.read()) < 20;

    rsx! {
        div {
            class: "card",
            h2 { style: "margin-top: 0; font-size: 1.1rem;", "New post" }

            if let Some(err) = error_message.read().as_ref() {
                p { class: "error", "{err}" }
            }

            form {
                onsubmit: submit,
                style: "display: flex; flex-direction: column; gap: 0.75rem;",
                input {
                    r#type: "url",
                    placeholder: "https://example.com",
                    required: true,
                    value: "{url}",
                    oninput: move |e| url.set(e.value()),
                }
                textarea {
                    rows: 3,
                    placeholder: "Say something about this link...",
                    required: true,
                    value: "{content}",
                    oninput: move |e| content.set(truncate_to_limit(&e.value())),
                }
                span {
                    class: if nearly_full { "muted over-limit" } else { "muted" },
                    style: "align-self: flex-end;",
                    "{used}/{MAX_POST_CONTENT_UNITS}"
                }
                button {
                    r#type: "submit",
                    disabled: *is_saving.read(),
                    "Post"
                }
            }
        }
    }
}
