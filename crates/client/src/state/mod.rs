//! State containers for client-side dependency injection
//!
//! Concrete containers that aggregate platform adapters behind port traits.

mod platform;

pub use platform::Platform;
