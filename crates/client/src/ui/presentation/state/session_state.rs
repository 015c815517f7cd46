//! Session state using Dioxus signals
//!
//! Mirrors the session service for rendering. Components update it after a
//! successful login, register or logout.

use dioxus::prelude::*;
use linkfeed_domain::{Identity, UserId};

#[derive(Clone, Copy)]
pub struct SessionState {
    /// The signed-in identity
    pub identity: Signal<Option<Identity>>,
    /// A login/register/logout call is in flight
    pub is_loading: Signal<bool>,
}

impl SessionState {
    pub fn new(identity: Option<Identity>) -> Self {
        Self {
            identity: Signal::new(identity),
            is_loading: Signal::new(false),
        }
    }

    pub fn set_identity(&mut self, identity: Option<Identity>) {
        self.identity.set(identity);
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.read().is_some()
    }

    /// Whether `user_id` belongs to the signed-in identity
    pub fn is_current(&self, user_id: &UserId) -> bool {
        self.identity
            .read()
            .as_ref()
            .is_some_and(|identity| &identity.id == user_id)
    }
}
