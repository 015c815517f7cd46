//! Session Service - owns the current identity and its persistence
//!
//! At most one identity is current. Login and register replace it wholesale
//! and persist it under `storage_keys::SESSION_USER`; logout clears both.

use std::sync::{Arc, RwLock, RwLockWriteGuard};

use linkfeed_domain::Identity;

use crate::application::ServiceError;
use crate::ports::outbound::{storage_keys, IdentityProvider, PlatformPort};

/// Session store for the signed-in identity
pub struct SessionService {
    provider: Arc<dyn IdentityProvider>,
    platform: Arc<dyn PlatformPort>,
    current: RwLock<Option<Identity>>,
}

impl SessionService {
    /// Create the session store, hydrating from persisted storage.
    ///
    /// A persisted identity wins. Without one the session starts as
    /// `fallback` (the seeded default identity in the standard wiring, or
    /// `None` for a logged-out start). An unreadable persisted value is
    /// removed and treated as absent.
    pub fn restore(
        provider: Arc<dyn IdentityProvider>,
        platform: Arc<dyn PlatformPort>,
        fallback: Option<Identity>,
    ) -> Self {
        let current = match platform.storage_load(storage_keys::SESSION_USER) {
            Some(raw) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    tracing::debug!(user_id = %identity.id, "Restored persisted session");
                    Some(identity)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable persisted session");
                    platform.storage_remove(storage_keys::SESSION_USER);
                    fallback
                }
            },
            None => fallback,
        };

        Self {
            provider,
            platform,
            current: RwLock::new(current),
        }
    }

    /// The signed-in identity, if any
    pub fn current(&self) -> Option<Identity> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Sign in. The simulated provider ignores the password.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ServiceError> {
        let identity = self.provider.login(email, password).await?;
        self.establish(identity.clone())?;
        tracing::info!(user_id = %identity.id, "Signed in");
        Ok(identity)
    }

    /// Create an account and sign in as it.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Identity, ServiceError> {
        let identity = self.provider.register(email, password, name).await?;
        self.establish(identity.clone())?;
        tracing::info!(user_id = %identity.id, name = %identity.name, "Registered");
        Ok(identity)
    }

    /// Sign out and forget the persisted identity.
    pub async fn logout(&self) -> Result<(), ServiceError> {
        self.provider.logout().await?;
        *self.write_current()? = None;
        self.platform.storage_remove(storage_keys::SESSION_USER);
        tracing::info!("Signed out");
        Ok(())
    }

    fn establish(&self, identity: Identity) -> Result<(), ServiceError> {
        let json = serde_json::to_string(&identity)?;
        let mut current = self.write_current()?;
        self.platform.storage_save(storage_keys::SESSION_USER, &json);
        *current = Some(identity);
        Ok(())
    }

    fn write_current(&self) -> Result<RwLockWriteGuard<'_, Option<Identity>>, ServiceError> {
        self.current
            .write()
            .map_err(|_| ServiceError::backend("session state lock poisoned"))
    }
}
