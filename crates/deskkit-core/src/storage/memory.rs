use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::backend::KvBackend;
use crate::error::StorageError;

/// Process-local key-value map.
///
/// An optional quota caps the total of key and value lengths across all
/// entries, counted in bytes. A disabled backend fails every call with
/// [`StorageError::Unavailable`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
    disabled: Cell<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Toggle the simulated "storage disabled" condition.
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    fn ensure_enabled(&self) -> Result<(), StorageError> {
        if self.disabled.get() {
            return Err(StorageError::Unavailable("storage is disabled".into()));
        }
        Ok(())
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KvBackend for MemoryBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_enabled()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_enabled()?;
        if let Some(limit) = self.quota_bytes {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_enabled()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.ensure_enabled()?;
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}
