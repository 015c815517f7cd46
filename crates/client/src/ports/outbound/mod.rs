//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! so application services never depend on the simulated backend or on a
//! particular platform.

pub mod identity_provider;
pub mod platform;
pub mod platform_port;
pub mod post_repository;
pub mod user_directory;

pub use identity_provider::IdentityProvider;
pub use platform::{storage_keys, DocumentProvider, LogProvider, StorageProvider, TimeProvider};
pub use platform_port::PlatformPort;
pub use post_repository::PostRepository;
pub use user_directory::UserDirectory;

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
