//! Storage port — origin-scoped key/value persistence.

use folio_domain::error::StorageError;

/// Persistent string key/value store surviving page reloads.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store is unreachable or the read is
    /// rejected.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store is unreachable or the write is
    /// rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
