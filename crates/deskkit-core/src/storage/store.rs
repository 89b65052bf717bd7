//! Typed, fail-soft adapter over a [`KvBackend`].
//!
//! `get`, `set` and `remove` never fail from the caller's point of view:
//! backend and decode errors go to the tracing diagnostics channel and the
//! operation degrades to "return the default" or "no-op". The `try_*`
//! variants expose the same operations with errors for tooling.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::KvBackend;
use super::config::{BackendKind, StorageConfig};
use super::data_dir;
use super::database::{SqliteBackend, DEFAULT_DB_FILE};
use super::memory::MemoryBackend;
use crate::error::StorageError;

/// Typed JSON persistence shared by every widget and timer.
///
/// Cheap to hand out by reference; each collection borrows it for its own
/// lifetime and writes back whole values under its key.
pub struct Store {
    backend: Box<dyn KvBackend>,
}

impl Store {
    pub fn new(backend: impl KvBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Unbounded process-local store.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Open the backend described by the `[storage]` config section.
    ///
    /// # Errors
    /// Returns an error if the SQLite file cannot be opened.
    pub fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        match config.backend {
            BackendKind::Memory => Ok(Self::new(match config.quota_bytes {
                Some(limit) => MemoryBackend::with_quota(limit),
                None => MemoryBackend::new(),
            })),
            BackendKind::Sqlite => {
                let file = config.file.as_deref().unwrap_or(DEFAULT_DB_FILE);
                let path = std::path::Path::new(file);
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    data_dir()
                        .map_err(|e| StorageError::Unavailable(e.to_string()))?
                        .join(path)
                };
                Ok(Self::new(SqliteBackend::open_at(&path)?))
            }
        }
    }

    /// Decoded value under `key`, or `default` on absence or any failure.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                tracing::warn!(key, error = %err, "falling back to default value");
                default
            }
        }
    }

    /// Encode and write `value`. Failures are logged and swallowed.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_set(key, value) {
            tracing::error!(key, error = %err, "failed to persist value");
        }
    }

    /// Delete `key`. Failures are logged and swallowed.
    pub fn remove(&self, key: &str) {
        if let Err(err) = self.backend.remove_raw(key) {
            tracing::error!(key, error = %err, "failed to remove value");
        }
    }

    /// Like [`get`](Self::get) but reports what went wrong.
    ///
    /// An empty stored string counts as absent.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get_raw(key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            })
    }

    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.set_raw(key, &raw)?;
        tracing::trace!(key, bytes = raw.len(), "persisted value");
        Ok(())
    }

    pub fn try_remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove_raw(key)
    }

    /// Undecoded JSON text under `key`, if readable.
    pub fn raw(&self, key: &str) -> Option<String> {
        match self.backend.get_raw(key) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read raw value");
                None
            }
        }
    }

    /// Present keys, or empty when the backend is unreachable.
    pub fn keys(&self) -> Vec<String> {
        self.backend.keys().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to list keys");
            Vec::new()
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        done: bool,
    }

    #[test]
    fn get_returns_default_for_missing_key() {
        let store = Store::in_memory();
        let default = vec![Item {
            id: "a".into(),
            done: false,
        }];
        let got = store.get("todos", default.clone());
        assert_eq!(got, default);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = Store::in_memory();
        let items = vec![Item {
            id: "1".into(),
            done: true,
        }];
        store.set("todos", &items);
        assert_eq!(store.get::<Vec<Item>>("todos", Vec::new()), items);
    }

    #[test]
    fn corrupt_value_falls_back_then_is_overwritten() {
        let backend = MemoryBackend::new();
        backend.set_raw("todos", "{not json").unwrap();
        let store = Store::new(backend);

        assert!(store.get::<Vec<Item>>("todos", Vec::new()).is_empty());
        assert!(matches!(
            store.try_get::<Vec<Item>>("todos"),
            Err(StorageError::Decode { .. })
        ));

        store.set("todos", &Vec::<Item>::new());
        assert_eq!(store.raw("todos").as_deref(), Some("[]"));
    }

    #[test]
    fn incompatible_shape_falls_back() {
        let store = Store::in_memory();
        store.set("stopwatch_lastTime", "not a number");
        assert_eq!(store.get("stopwatch_lastTime", 7_u64), 7);
    }

    #[test]
    fn empty_string_counts_as_absent() {
        let backend = MemoryBackend::new();
        backend.set_raw("notes", "").unwrap();
        let store = Store::new(backend);
        assert_eq!(store.get("notes", 3_u32), 3);
    }

    #[test]
    fn quota_exceeded_is_silent_and_keeps_previous_value() {
        let store = Store::new(MemoryBackend::with_quota(16));
        store.set("k", &vec![1, 2]);
        store.set("k", &vec![1_u32; 64]);
        assert_eq!(store.get::<Vec<u32>>("k", Vec::new()), vec![1, 2]);
        assert!(matches!(
            store.try_set("k", &vec![1_u32; 64]),
            Err(StorageError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let store = Store::in_memory();
        store.remove("bookmarks");
        store.set("bookmarks", &Vec::<Item>::new());
        store.remove("bookmarks");
        assert!(store.keys().is_empty());
    }

    #[test]
    fn open_memory_backend_from_config() {
        let config = StorageConfig {
            backend: BackendKind::Memory,
            file: None,
            quota_bytes: Some(8),
        };
        let store = Store::open(&config).unwrap();
        assert!(store.try_set("longer-than-eight", &1).is_err());
    }

    #[test]
    fn open_reports_unreachable_sqlite_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing").join("deskkit.db");
        let config = StorageConfig {
            backend: BackendKind::Sqlite,
            file: Some(missing.to_string_lossy().into_owned()),
            quota_bytes: None,
        };
        let err: crate::error::CoreError = Store::open(&config).err().unwrap().into();
        assert!(err.to_string().starts_with("Storage error: Failed to open store"));
    }
}
