//! Application layer - use cases over the outbound ports.

pub mod error;
pub mod services;

pub use error::ServiceError;

use chrono::{DateTime, Utc};

use crate::ports::outbound::PlatformPort;

/// Current time from the platform clock.
pub fn now(platform: &dyn PlatformPort) -> DateTime<Utc> {
    i64::try_from(platform.now_millis())
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
