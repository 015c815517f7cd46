//! Infrastructure layer - adapters behind the outbound ports

pub mod platform;
pub mod simulated;
