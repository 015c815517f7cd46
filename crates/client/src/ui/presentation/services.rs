//! Service providers for the presentation layer
//!
//! The composition root places one `Services` bundle in Dioxus context.
//! Components reach the stores through the `use_*_service` hooks and never
//! name infrastructure types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{PostService, ProfileService, SessionService};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub session: Arc<SessionService>,
    pub post: Arc<PostService>,
    pub profile: Arc<ProfileService>,
}

/// Hook to access the SessionService from context
pub fn use_session_service() -> Arc<SessionService> {
    let services = use_context::<Services>();
    services.session.clone()
}

/// Hook to access the PostService from context
pub fn use_post_service() -> Arc<PostService> {
    let services = use_context::<Services>();
    services.post.clone()
}

/// Hook to access the ProfileService from context
pub fn use_profile_service() -> Arc<ProfileService> {
    let services = use_context::<Services>();
    services.profile.clone()
}
