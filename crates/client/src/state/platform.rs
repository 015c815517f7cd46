//! Platform DI Container
//!
//! `Platform` aggregates the platform-specific providers behind port traits.
//! It is created by `create_platform()` in `infrastructure/platform/desktop.rs`
//! or `infrastructure/platform/wasm.rs` (or `MockPlatform::platform()` in
//! tests), then handed to services and the UI as `Arc<dyn PlatformPort>`.

use std::sync::Arc;

use crate::ports::outbound::{
    DocumentProvider, LogProvider, PlatformPort, StorageProvider, TimeProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    log: Arc<dyn LogProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_millis(&self) -> u64;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait LogProviderDyn: Send + Sync {
    fn error(&self, msg: &str);
    fn warn(&self, msg: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: LogProvider + Send + Sync> LogProviderDyn for T {
    fn error(&self, msg: &str) {
        LogProvider::error(self, msg)
    }
    fn warn(&self, msg: &str) {
        LogProvider::warn(self, msg)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, S, L, D>(time: Tm, storage: S, log: L, document: D) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        L: LogProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            storage: Arc::new(storage),
            log: Arc::new(log),
            document: Arc::new(document),
        }
    }
}

impl PlatformPort for Platform {
    fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn log_error(&self, msg: &str) {
        self.log.error(msg)
    }

    fn log_warn(&self, msg: &str) {
        self.log.warn(msg)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}
