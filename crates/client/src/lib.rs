//! Linkfeed client.
//!
//! Session and post stores over outbound ports, a simulated backend, platform
//! adapters, and the Dioxus UI. Platform code is selected with `cfg`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::{ClientConfig, ShellKind};
pub use ui::app;
pub use ui::{use_platform, View};
