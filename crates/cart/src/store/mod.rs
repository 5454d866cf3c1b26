//! Persistent key/value storage for the cart.
//!
//! The store is pure storage: it moves opaque bytes under string keys and
//! knows nothing about carts. Encoding lives in [`crate::codec`].
//!
//! Two implementations are provided:
//! - [`MemoryStore`] - process-local, with an optional byte quota
//! - [`FileStore`] - one file per key under a directory, survives restarts

mod file;

use std::collections::HashMap;

pub use file::FileStore;

use crate::error::StoreError;

/// Durable key/value byte storage scoped to one site origin.
pub trait PersistentStore {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be written; the previous
    /// value is left in place.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be modified.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, the stand-in for durable storage in tests and demos.
///
/// An optional quota caps the total bytes held across all keys, which lets
/// callers exercise the "storage full" path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that holds at most `quota` bytes of values.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Change the quota; existing entries are kept even if they exceed it.
    pub const fn set_quota(&mut self, quota: Option<usize>) {
        self.quota = quota;
    }

    /// Total bytes currently held.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let replaced = self.entries.get(key).map_or(0, Vec::len);
            let available = quota.saturating_sub(self.used_bytes() - replaced);
            if value.len() > available {
                return Err(StoreError::QuotaExceeded {
                    requested: value.len(),
                    available,
                });
            }
        }
        self.entries.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert!(store.get("cart_items").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("cart_items", b"[]").unwrap();
        assert_eq!(store.get("cart_items").unwrap().as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("nothing").is_ok());
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let mut store = MemoryStore::with_quota(4);
        store.set("k", b"1234").unwrap();

        let err = store.set("other", b"5").unwrap_err();
        assert!(matches!(
            err,
            StoreError::QuotaExceeded {
                requested: 1,
                available: 0
            }
        ));
        assert!(store.get("other").unwrap().is_none());
    }

    #[test]
    fn test_quota_counts_replaced_value_as_free() {
        let mut store = MemoryStore::with_quota(4);
        store.set("k", b"1234").unwrap();
        store.set("k", b"abcd").unwrap();
        assert_eq!(store.used_bytes(), 4);
    }
}
