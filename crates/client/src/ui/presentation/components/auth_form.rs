//! Auth Form - login and registration in one modal

use dioxus::prelude::*;

use crate::presentation::services::use_session_service;
use crate::presentation::state::SessionState;
use crate::ui::use_platform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Props for AuthForm
#[derive(Props, Clone, PartialEq)]
pub struct AuthFormProps {
    pub initial_mode: AuthMode,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn AuthForm(props: AuthFormProps) -> Element {
    let session_service = use_session_service();
    let platform = use_platform();
    let mut session_state = use_context::<SessionState>();

    let mut mode = use_signal(|| props.initial_mode);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let svc = session_service.clone();
        let platform = platform.clone();
        let on_close = props.on_close;
        let current_mode = *mode.read();
        let email_val = email.read().clone();
        let password_val = password.read().clone();
        let name_val = name.read().clone();

        error_message.set(None);
        session_state.is_loading.set(true);

        spawn(async move {
            let result = match current_mode {
                AuthMode::Login => svc.login(&email_val, &password_val).await,
                AuthMode::Register => svc.register(&email_val, &password_val, &name_val).await,
            };

            match result {
                Ok(identity) => {
                    session_state.set_identity(Some(identity));
                    on_close.call(());
                }
                Err(e) => {
                    platform.log_error(&format!("Authentication failed: {e}"));
                    error_message.set(Some(e.user_message().to_string()));
                }
            }
            session_state.is_loading.set(false);
        });
    };

    let is_login = *mode.read() == AuthMode::Login;

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 50;",
            onclick: move |_| props.on_close.call(()),
            div {
                class: "card",
                style: "width: 100%; max-width: 24rem;",
                onclick: |e| e.stop_propagation(),

                h2 { if is_login { "Log in" } else { "Sign up" } }

                if let Some(err) = error_message.read().as_ref() {
                    p { class: "error", "{err}" }
                }

                form {
                    onsubmit: submit,
                    style: "display: flex; flex-direction: column; gap: 0.75rem;",

                    if !is_login {
                        input {
                            r#type: "text",
                            placeholder: "Name",
                            required: true,
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    input {
                        r#type: "email",
                        placeholder: "example@email.com",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        disabled: *session_state.is_loading.read(),
                        if is_login { "Log in" } else { "Create account" }
                    }
                }

                button {
                    style: "margin-top: 1rem; background: none; border: 0; color: #2563eb;",
                    onclick: move |_| {
                        mode.set(if is_login { AuthMode::Register } else { AuthMode::Login });
                        error_message.set(None);
                    },
                    if is_login { "Need an account? Sign up" } else { "Already have an account? Log in" }
                }
            }
        }
    }
}
