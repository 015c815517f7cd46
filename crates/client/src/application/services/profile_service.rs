//! Profile Service - assembles the data behind a profile page

use std::sync::Arc;

use linkfeed_domain::{Identity, Post, UserId};

use crate::application::services::{PostService, SessionService};
use crate::application::ServiceError;
use crate::ports::outbound::UserDirectory;

/// A profile page's worth of data
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub identity: Identity,
    /// Whether this is the signed-in identity's own profile
    pub is_own: bool,
    pub avatar: String,
    pub handle: String,
    pub website_host: Option<String>,
    /// The user's posts in feed order
    pub posts: Vec<Post>,
}

impl Profile {
    fn build(identity: Identity, is_own: bool, posts: Vec<Post>) -> Self {
        Self {
            avatar: identity.display_avatar(),
            handle: identity.handle(),
            website_host: identity.website_hostname(),
            identity,
            is_own,
            posts,
        }
    }
}

pub struct ProfileService {
    session: Arc<SessionService>,
    directory: Arc<dyn UserDirectory>,
    posts: Arc<PostService>,
}

impl ProfileService {
    pub fn new(
        session: Arc<SessionService>,
        directory: Arc<dyn UserDirectory>,
        posts: Arc<PostService>,
    ) -> Self {
        Self {
            session,
            directory,
            posts,
        }
    }

    /// Look up a profile.
    ///
    /// `None` (or the current identity's ID) means the own profile, which is
    /// `None` while signed out. Unknown users are `None` as well.
    pub async fn profile(&self, user_id: Option<&UserId>) -> Result<Option<Profile>, ServiceError> {
        let current = self.session.current();
        let own = match (user_id, &current) {
            (None, _) => true,
            (Some(id), Some(me)) => id == &me.id,
            (Some(_), None) => false,
        };

        let identity = if own {
            current
        } else {
            match user_id {
                Some(id) => self.directory.find(id).await?,
                None => None,
            }
        };

        let Some(identity) = identity else {
            tracing::debug!(user_id = ?user_id.map(UserId::as_str), "Profile not found");
            return Ok(None);
        };

        let posts = self.posts.posts_by_user(&identity.id).await?;
        Ok(Some(Profile::build(identity, own, posts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::infrastructure::simulated::{
        default_identity, seed_posts, seed_users, InMemoryPostRepository, InMemoryUserDirectory,
        SimulatedIdentityProvider,
    };
    use crate::ports::outbound::{MockUserDirectory, PlatformPort};
    use chrono::Utc;

    fn profiles_with(
        identity: Option<Identity>,
        directory: Arc<dyn UserDirectory>,
    ) -> (Arc<SessionService>, ProfileService) {
        let platform: Arc<dyn PlatformPort> = Arc::new(MockPlatform::default().platform());
        let provider = Arc::new(SimulatedIdentityProvider::new(platform.clone()));
        let session = Arc::new(SessionService::restore(provider, platform.clone(), identity));
        let repository = Arc::new(InMemoryPostRepository::with_posts(seed_posts(Utc::now())));
        let posts = Arc::new(PostService::new(repository, session.clone(), platform));
        let profiles = ProfileService::new(session.clone(), directory, posts);
        (session, profiles)
    }

    fn profiles(identity: Option<Identity>) -> ProfileService {
        profiles_with(identity, Arc::new(InMemoryUserDirectory::new(seed_users()))).1
    }

    #[tokio::test]
    async fn own_profile_without_id() {
        let profile = profiles(Some(default_identity()))
            .profile(None)
            .await
            .unwrap()
            .unwrap();

        assert!(profile.is_own);
        assert_eq!(profile.identity, default_identity());
        assert_eq!(profile.handle, "@ichirosuzuki");
        assert_eq!(profile.website_host.as_deref(), Some("example.com"));
        assert_eq!(profile.posts.len(), 1);
        assert_eq!(profile.posts[0].id.as_str(), "3");
    }

    #[tokio::test]
    async fn own_id_is_treated_as_own_profile() {
        let own_id = default_identity().id;
        let profile = profiles(Some(default_identity()))
            .profile(Some(&own_id))
            .await
            .unwrap()
            .unwrap();
        assert!(profile.is_own);
    }

    #[tokio::test]
    async fn own_profile_is_none_when_signed_out() {
        assert_eq!(profiles(None).profile(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn known_user_comes_from_directory() {
        let profile = profiles(Some(default_identity()))
            .profile(Some(&UserId::new("user-1")))
            .await
            .unwrap()
            .unwrap();

        assert!(!profile.is_own);
        assert_eq!(profile.identity.name, "Taro Yamada");
        assert_eq!(profile.handle, "@taroyamada");
        assert!(profile.posts.iter().all(|p| p.user_id.as_str() == "user-1"));
        assert_eq!(profile.posts.len(), 1);
    }

    #[tokio::test]
    async fn unknown_user_is_none() {
        let found = profiles(Some(default_identity()))
            .profile(Some(&UserId::new("ghost")))
            .await
            .unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn registered_identity_keeps_shared_id() {
        let (session, profiles) = profiles_with(
            Some(default_identity()),
            Arc::new(InMemoryUserDirectory::new(seed_users())),
        );
        let mut identity = session.register("a@x.com", "pw", "Ann").await.unwrap();
        identity.avatar = None;

        let profile = profiles.profile(None).await.unwrap().unwrap();
        assert_eq!(profile.avatar, identity.display_avatar());
        // Register keeps the shared ID, so the seeded post still belongs here
        assert_eq!(profile.posts.len(), 1);
        assert_eq!(profile.website_host, None);
    }

    #[tokio::test]
    async fn directory_failure_propagates() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_find()
            .returning(|_| Err(ServiceError::backend("directory offline")));
        let (_, profiles) = profiles_with(Some(default_identity()), Arc::new(directory));

        let err = profiles
            .profile(Some(&UserId::new("user-1")))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Backend(_)));
    }
}
