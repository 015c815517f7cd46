//! In-memory user directory

use std::collections::HashMap;

use async_trait::async_trait;
use linkfeed_domain::{Identity, UserId};

use crate::application::ServiceError;
use crate::ports::outbound::UserDirectory;

/// Read-only lookup over a fixed set of users
pub struct InMemoryUserDirectory {
    users: HashMap<UserId, Identity>,
}

impl InMemoryUserDirectory {
    pub fn new(users: impl IntoIterator<Item = Identity>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.id.clone(), user))
                .collect(),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find(&self, user_id: &UserId) -> Result<Option<Identity>, ServiceError> {
        Ok(self.users.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::simulated::seed_users;

    #[tokio::test]
    async fn finds_seeded_users_only() {
        let directory = InMemoryUserDirectory::new(seed_users());

        let found = directory.find(&UserId::new("user-2")).await.unwrap();
        assert_eq!(found.map(|u| u.name), Some("Hanako Sato".to_string()));

        assert_eq!(directory.find(&UserId::new("user-9")).await.unwrap(), None);
    }
}
