//! Simulated backend
//!
//! In-memory stand-ins for the identity service, the post store and the user
//! directory, plus the seed data they start from. Nothing here does I/O.

mod identity_provider;
mod post_repository;
mod seed;
mod user_directory;

pub use identity_provider::SimulatedIdentityProvider;
pub use post_repository::InMemoryPostRepository;
pub use seed::{default_identity, seed_posts, seed_users, DEFAULT_USER_ID};
pub use user_directory::InMemoryUserDirectory;
