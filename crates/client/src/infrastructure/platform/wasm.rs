//! WASM platform implementations
//!
//! Browser-backed providers: `Date.now()`, `window.localStorage`,
//! `tracing-wasm` logging and `document.title`.

use crate::config::ClientConfig;
use crate::ports::outbound::platform::{
    DocumentProvider, LogProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;

/// Browser time provider using `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Browser storage provider backed by `window.localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::error!(key, error = ?e, "Failed to write localStorage");
                }
            }
            None => tracing::warn!(key, "localStorage unavailable, value not saved"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!(key, error = ?e, "Failed to remove localStorage key");
            }
        }
    }
}

/// Browser log provider; `tracing-wasm` forwards to the console
#[derive(Clone, Default)]
pub struct WasmLogProvider;

impl LogProvider for WasmLogProvider {
    fn error(&self, msg: &str) {
        tracing::error!(target: "linkfeed_client::ui", "{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: "linkfeed_client::ui", "{msg}");
    }
}

/// Browser document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create platform services for the browser.
///
/// The storage location is fixed to localStorage; `config.storage_path` only
/// applies on desktop.
pub fn create_platform(_config: &ClientConfig) -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmStorageProvider,
        WasmLogProvider,
        WasmDocumentProvider,
    )
}
