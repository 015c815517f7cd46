//! Composition root: wires platform, simulated backend and services, then
//! launches the UI.

use std::sync::Arc;

use crate::application::now;
use crate::application::services::{PostService, ProfileService, SessionService};
use crate::config::{ClientConfig, ShellKind};
use crate::infrastructure::platform::create_platform;
use crate::infrastructure::simulated::{
    default_identity, seed_posts, seed_users, InMemoryPostRepository, InMemoryUserDirectory,
    SimulatedIdentityProvider,
};
use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::Services;

/// Build the service bundle over `platform`.
///
/// With seed data on, the feed starts with the seed posts and a session with
/// nothing persisted starts as the default identity.
pub fn build_services(platform: Arc<dyn PlatformPort>, config: &ClientConfig) -> Services {
    let (fallback, posts) = if config.seed_data {
        let started_at = now(platform.as_ref());
        (Some(default_identity()), seed_posts(started_at))
    } else {
        (None, Vec::new())
    };

    let provider = Arc::new(SimulatedIdentityProvider::new(platform.clone()));
    let session = Arc::new(SessionService::restore(provider, platform.clone(), fallback));

    let repository = Arc::new(InMemoryPostRepository::with_posts(posts));
    let post = Arc::new(PostService::new(repository, session.clone(), platform));

    let directory = Arc::new(InMemoryUserDirectory::new(if config.seed_data {
        seed_users()
    } else {
        Vec::new()
    }));
    let profile = Arc::new(ProfileService::new(session.clone(), directory, post.clone()));

    Services {
        session,
        post,
        profile,
    }
}

pub fn run(config: ClientConfig) {
    let platform: Arc<dyn PlatformPort> = Arc::new(create_platform(&config));
    let services = build_services(platform.clone(), &config);
    let shell = resolve_shell(config.shell);

    tracing::info!(?shell, seed_data = config.seed_data, "Launching UI");

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!("<style>{}</style>", crate::ui::APP_CSS);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(services)
        .launch(crate::ui::app);
}

/// In the browser the layout follows the viewport width.
#[cfg(target_arch = "wasm32")]
fn resolve_shell(_configured: ShellKind) -> ShellKind {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);

    if width < 768.0 {
        ShellKind::Mobile
    } else {
        ShellKind::Desktop
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_shell(configured: ShellKind) -> ShellKind {
    configured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;

    const NOW: u64 = 1_718_000_000_000;

    fn services(seed_data: bool) -> Services {
        let platform: Arc<dyn PlatformPort> = Arc::new(MockPlatform::at_millis(NOW).platform());
        let config = ClientConfig {
            seed_data,
            ..ClientConfig::default()
        };
        build_services(platform, &config)
    }

    #[tokio::test]
    async fn seeded_wiring_starts_signed_in_with_feed() {
        let services = services(true);

        assert_eq!(services.session.current(), Some(default_identity()));
        let posts = services.post.list_posts().await.unwrap();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(
            posts[2].created_at.timestamp_millis() as u64,
            NOW - 3_600_000
        );
    }

    #[tokio::test]
    async fn unseeded_wiring_starts_empty_and_signed_out() {
        let services = services(false);

        assert!(!services.session.is_authenticated());
        assert!(services.post.list_posts().await.unwrap().is_empty());
        assert_eq!(services.profile.profile(None).await.unwrap(), None);
    }
}
