//! Navbar - brand, account menu, and the login/register entry points

use dioxus::prelude::*;

use crate::presentation::components::{AuthForm, AuthMode};
use crate::presentation::services::use_session_service;
use crate::presentation::state::SessionState;
use crate::ui::{use_platform, View};

#[component]
pub fn Navbar() -> Element {
    let session_service = use_session_service();
    let platform = use_platform();
    let mut session_state = use_context::<SessionState>();
    let mut view = use_context::<Signal<View>>();

    let mut auth_mode: Signal<Option<AuthMode>> = use_signal(|| None);
    let mut menu_open = use_signal(|| false);

    let logout = move |_| {
        let svc = session_service.clone();
        let platform = platform.clone();
        session_state.is_loading.set(true);

        spawn(async move {
            match svc.logout().await {
                Ok(()) => {
                    session_state.set_identity(None);
                    menu_open.set(false);
                    view.set(View::Feed);
                }
                Err(e) => platform.log_error(&format!("Logout failed: {e}")),
            }
            session_state.is_loading.set(false);
        });
    };

    let identity = session_state.identity.read().clone();

    rsx! {
        nav {
            class: "navbar",
            span {
                class: "brand",
                onclick: move |_| view.set(View::Feed),
                "Linkfeed"
            }

            if let Some(identity) = identity {
                div {
                    style: "position: relative;",
                    button {
                        style: "background: none; border: 0;",
                        onclick: move |_| {
                            let open = *menu_open.read();
                            menu_open.set(!open);
                        },
                        img {
                            class: "avatar",
                            src: "{identity.display_avatar()}",
                            alt: "{identity.name}",
                        }
                    }

                    if *menu_open.read() {
                        div {
                            class: "card",
                            style: "position: absolute; right: 0; min-width: 12rem; z-index: 10;",
                            p { style: "margin: 0; font-weight: 600;", "{identity.name}" }
                            p { class: "muted", style: "margin: 0 0 0.5rem;", "{identity.email}" }
                            button {
                                onclick: move |_| {
                                    menu_open.set(false);
                                    view.set(View::Profile(None));
                                },
                                "Profile"
                            }
                            button {
                                disabled: *session_state.is_loading.read(),
                                onclick: logout,
                                "Log out"
                            }
                        }
                    }
                }
            } else {
                div {
                    style: "display: flex; gap: 0.5rem;",
                    button {
                        onclick: move |_| auth_mode.set(Some(AuthMode::Login)),
                        "Log in"
                    }
                    button {
                        onclick: move |_| auth_mode.set(Some(AuthMode::Register)),
                        "Sign up"
                    }
                }
            }
        }

        if let Some(mode) = *auth_mode.read() {
            AuthForm {
                initial_mode: mode,
                on_close: move |_| auth_mode.set(None),
            }
        }
    }
}
