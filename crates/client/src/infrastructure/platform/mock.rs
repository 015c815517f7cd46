//! In-memory platform for tests
//!
//! A controllable clock and a map-backed storage. Handles are shared, so a
//! test can keep a `MockStorageProvider` clone and inspect what services
//! persisted through the `Platform`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::ports::outbound::platform::{
    DocumentProvider, LogProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;

/// Clock that only moves when told to
#[derive(Clone, Default)]
pub struct MockTimeProvider {
    millis: Arc<AtomicU64>,
}

impl MockTimeProvider {
    pub fn at_millis(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    pub fn set_millis(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance_millis(&self, delta: u64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// Map-backed storage
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MockStorageProvider {
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.save(key, value);
        storage
    }

    pub fn contains(&self, key: &str) -> bool {
        self.load(key).is_some()
    }
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
    }
}

#[derive(Clone, Default)]
pub struct MockLogProvider;

impl LogProvider for MockLogProvider {
    fn error(&self, msg: &str) {
        tracing::error!(target: "linkfeed_client::ui", "{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: "linkfeed_client::ui", "{msg}");
    }
}

/// Remembers the last page title
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<RwLock<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn title(&self) -> Option<String> {
        self.title.read().ok().and_then(|t| t.clone())
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut current) = self.title.write() {
            *current = Some(title.to_string());
        }
    }
}

/// Handles to the providers behind a mock `Platform`
#[derive(Clone, Default)]
pub struct MockPlatform {
    pub clock: MockTimeProvider,
    pub storage: MockStorageProvider,
    pub document: MockDocumentProvider,
}

impl MockPlatform {
    pub fn at_millis(millis: u64) -> Self {
        Self {
            clock: MockTimeProvider::at_millis(millis),
            ..Self::default()
        }
    }

    pub fn with_storage(mut self, storage: MockStorageProvider) -> Self {
        self.storage = storage;
        self
    }

    /// Build a `Platform` sharing this mock's handles.
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.clock.clone(),
            self.storage.clone(),
            MockLogProvider,
            self.document.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[test]
    fn platform_shares_storage_with_handle() {
        let mock = MockPlatform::at_millis(5_000);
        let platform = mock.platform();

        platform.storage_save("user", "{}");
        assert!(mock.storage.contains("user"));

        platform.storage_remove("user");
        assert!(!mock.storage.contains("user"));
    }

    #[test]
    fn clock_moves_only_when_advanced() {
        let mock = MockPlatform::at_millis(5_000);
        let platform = mock.platform();

        assert_eq!(platform.now_millis(), 5_000);
        mock.clock.advance_millis(2_500);
        assert_eq!(platform.now_millis(), 7_500);
    }

    #[test]
    fn page_title_is_recorded() {
        let mock = MockPlatform::default();
        mock.platform().set_page_title("Ann (@ann)");
        assert_eq!(mock.document.title().as_deref(), Some("Ann (@ann)"));
    }
}
