use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use linkfeed_domain::UserId;
use std::sync::Arc;

pub mod presentation;

pub use crate::config::ShellKind;

use presentation::components::{Feed, Navbar};
use presentation::state::{FeedState, SessionState};
use presentation::views::ProfileView;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// What the main column shows
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Feed,
    /// A profile page; `None` is the signed-in identity's own
    Profile(Option<UserId>),
}

/// Minimal stylesheet injected into the page head
pub const APP_CSS: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f3f4f6; color: #111827; }
.navbar { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,0.08); }
.brand { font-weight: 700; color: #2563eb; cursor: pointer; }
.main { max-width: 40rem; margin: 1.5rem auto; display: flex; flex-direction: column; gap: 1rem; padding: 0 1rem; }
.card { background: #fff; border-radius: 0.75rem; padding: 1rem 1.25rem; box-shadow: 0 1px 2px rgba(0,0,0,0.06); }
.avatar { width: 2.5rem; height: 2.5rem; border-radius: 9999px; object-fit: cover; }
.muted { color: #6b7280; font-size: 0.875rem; }
.error { color: #dc2626; font-size: 0.875rem; }
.over-limit { color: #dc2626; }
button { cursor: pointer; }
textarea, input { width: 100%; box-sizing: border-box; padding: 0.5rem; }
"#;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `runner.rs`).
    let shell = use_context::<ShellKind>();
    let services = use_context::<presentation::Services>();
    let platform = use_platform();

    // These must be created inside an active Dioxus runtime.
    let session_state = use_context_provider(|| SessionState::new(services.session.current()));
    use_context_provider(FeedState::new);
    let view = use_context_provider(|| Signal::new(View::default()));

    // Keep the window title in step with who is signed in
    use_effect(move || {
        let title = match session_state.identity.read().as_ref() {
            Some(identity) => format!("Linkfeed - {}", identity.name),
            None => "Linkfeed".to_string(),
        };
        platform.set_page_title(&title);
    });

    let body = match view.read().clone() {
        View::Feed => rsx! { Feed {} },
        View::Profile(user_id) => {
            let key = user_id
                .as_ref()
                .map_or_else(|| "own".to_string(), |id| id.to_string());
            rsx! { ProfileView { key: "{key}", user_id } }
        }
    };

    rsx! {
        // Desktop gets the stylesheet through the window head instead
        if cfg!(target_arch = "wasm32") {
            style { {APP_CSS} }
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        Navbar {}
                        {body}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        Navbar {}
                        {body}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            style: "min-height: 100vh;",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; font-size: 15px;",
            {children}
        }
    }
}
