//! Identity provider port - authentication boundary.

use async_trait::async_trait;
use linkfeed_domain::Identity;

use crate::application::ServiceError;

/// Authenticates users and issues identities.
///
/// The shipped implementation is simulated and never fails; a network-backed
/// provider can replace it without touching the session service or the UI.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<Identity, ServiceError>;

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Identity, ServiceError>;

    async fn logout(&self) -> Result<(), ServiceError>;
}
