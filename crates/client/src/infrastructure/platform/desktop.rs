//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using the
//! standard library and native crates.

use crate::config::ClientConfig;
use crate::ports::outbound::platform::{
    DocumentProvider, LogProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// Desktop time provider using std::time
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file, by default at:
/// - Linux: ~/.config/linkfeed/storage.json
/// - macOS: ~/Library/Application Support/io.linkfeed.client/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\linkfeed\client\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider at the platform config location.
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "linkfeed", "client") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("linkfeed_storage.json")
        };
        Self::at(storage_path)
    }

    /// Create a storage provider backed by `storage_path`.
    ///
    /// Loads existing data from the file if it exists.
    pub fn at(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = load_cache(&storage_path);

        tracing::debug!(path = %storage_path.display(), "Desktop storage ready");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::error!(error = %e, path = %parent.display(), "Failed to create storage directory");
                    return;
                }
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!(error = %e, "Storage lock poisoned");
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!(error = %e, path = %self.storage_path.display(), "Failed to write storage file");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize storage data");
            }
        }
    }
}

fn load_cache(storage_path: &Path) -> HashMap<String, String> {
    if !storage_path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(storage_path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(error = %e, path = %storage_path.display(), "Unreadable storage file, starting empty");
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, path = %storage_path.display(), "Failed to read storage file");
            HashMap::new()
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!(error = %e, "Storage lock poisoned");
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!(error = %e, "Storage lock poisoned");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                let existed = guard.remove(key).is_some();
                drop(guard);
                if existed {
                    self.persist();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Storage lock poisoned");
            }
        }
    }
}

/// Desktop log provider using tracing
#[derive(Clone, Default)]
pub struct DesktopLogProvider;

impl LogProvider for DesktopLogProvider {
    fn error(&self, msg: &str) {
        tracing::error!(target: "linkfeed_client::ui", "{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: "linkfeed_client::ui", "{msg}");
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is managed by Dioxus desktop
    }
}

/// Create platform services for desktop
pub fn create_platform(config: &ClientConfig) -> Platform {
    let storage = match &config.storage_path {
        Some(path) => DesktopStorageProvider::at(path),
        None => DesktopStorageProvider::new(),
    };

    Platform::new(
        DesktopTimeProvider,
        storage,
        DesktopLogProvider,
        DesktopDocumentProvider,
    )
}
