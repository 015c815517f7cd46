//! User directory port - read-only lookup of other users' profiles.

use async_trait::async_trait;
use linkfeed_domain::{Identity, UserId};

use crate::application::ServiceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find(&self, user_id: &UserId) -> Result<Option<Identity>, ServiceError>;
}
