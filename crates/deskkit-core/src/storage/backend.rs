use crate::error::StorageError;

/// Raw string key-value medium underneath [`Store`](super::Store).
///
/// Implementations report every failure; deciding whether to swallow it is
/// the adapter's job, not the backend's.
pub trait KvBackend {
    /// Raw text under `key`, or `None` when the key was never written.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the text under `key`.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn remove_raw(&self, key: &str) -> Result<(), StorageError>;

    /// All present keys in ascending order.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
