//! Common utility functions shared by the domain and the client.
//!
//! Pure functions only: no side effects, no I/O, and everything must build
//! for both native and wasm32 targets.

pub mod datetime;
pub mod string;

pub use datetime::{
    date_at_midnight, deserialize_timestamp_or_date, parse_datetime, parse_timestamp_or_date,
};
pub use string::{deserialize_optional_text, some_if_not_empty};
