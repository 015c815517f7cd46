//! Application services
//!
//! Each service owns one store and talks to the outside world only through
//! outbound ports, so the UI and the tests can wire them the same way.

mod post_service;
mod profile_service;
mod session_service;

pub use post_service::PostService;
pub use profile_service::{Profile, ProfileService};
pub use session_service::SessionService;
