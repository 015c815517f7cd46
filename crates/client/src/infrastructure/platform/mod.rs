//! Platform-specific implementations
//!
//! Provides implementations of the platform ports defined in
//! `ports/outbound/platform.rs`. The correct platform is selected at compile
//! time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    create_platform, WasmDocumentProvider, WasmLogProvider, WasmStorageProvider,
    WasmTimeProvider,
};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_platform, DesktopDocumentProvider, DesktopLogProvider, DesktopStorageProvider,
    DesktopTimeProvider,
};
