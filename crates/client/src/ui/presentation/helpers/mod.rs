//! Pure display helpers, testable without a Dioxus runtime

pub mod time_helpers;

pub use time_helpers::{format_joined, format_relative_time};
