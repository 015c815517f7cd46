//! Simulated identity provider
//!
//! Accepts any credentials. Login hands back the default identity under the
//! given email; register builds a fresh one from the email and name.

use std::sync::Arc;

use async_trait::async_trait;
use linkfeed_domain::{generated_avatar_url, Identity, UserId};

use super::seed::{default_identity, DEFAULT_USER_ID};
use crate::application::{now, ServiceError};
use crate::ports::outbound::{IdentityProvider, PlatformPort};

pub struct SimulatedIdentityProvider {
    platform: Arc<dyn PlatformPort>,
}

impl SimulatedIdentityProvider {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }
}

#[async_trait]
impl IdentityProvider for SimulatedIdentityProvider {
    async fn login(&self, email: &str, _password: &str) -> Result<Identity, ServiceError> {
        let mut identity = default_identity();
        identity.email = email.to_string();
        Ok(identity)
    }

    async fn register(
        &self,
        email: &str,
        _password: &str,
        name: &str,
    ) -> Result<Identity, ServiceError> {
        let identity = Identity::new(
            UserId::new(DEFAULT_USER_ID),
            email,
            name,
            now(self.platform.as_ref()),
        )
        .with_avatar(generated_avatar_url(name));
        Ok(identity)
    }

    async fn logout(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;

    fn provider(millis: u64) -> SimulatedIdentityProvider {
        SimulatedIdentityProvider::new(Arc::new(MockPlatform::at_millis(millis).platform()))
    }

    #[tokio::test]
    async fn login_only_varies_by_email() {
        let provider = provider(0);
        let a = provider.login("a@x.com", "one").await.unwrap();
        let b = provider.login("b@x.com", "two").await.unwrap();

        assert_eq!(a.email, "a@x.com");
        assert_eq!(b.email, "b@x.com");
        assert_eq!(Identity { email: a.email.clone(), ..b }, a);
        assert_eq!(a.name, default_identity().name);
    }

    #[tokio::test]
    async fn register_starts_with_empty_profile() {
        let provider = provider(1_700_000_000_000);
        let identity = provider
            .register("ann@x.com", "pw", "Ann Lee")
            .await
            .unwrap();

        assert_eq!(identity.id, UserId::new(DEFAULT_USER_ID));
        assert_eq!(identity.email, "ann@x.com");
        assert_eq!((identity.bio, identity.location, identity.website), (None, None, None));
        assert_eq!(identity.joined_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(
            identity.avatar.as_deref(),
            Some("https://ui-avatars.com/api/?name=Ann+Lee&background=random")
        );
    }
}
