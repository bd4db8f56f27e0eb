//! In-memory key-value store.
//!
//! Used by tests and as the fallback backend when no storage directory is
//! available; contents are lost when the process exits.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::error::PersistenceError;
use super::KeyValueStore;

/// Key-value store holding all entries in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    ///
    /// Primarily useful in tests asserting on persistence side effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), PersistenceError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent"), Ok(None));
    }

    #[test]
    fn set_get_remove_cycle() {
        let store = MemoryStore::new();
        store.set("k", b"value").expect("set");
        assert_eq!(store.get("k"), Ok(Some(b"value".to_vec())));

        store.remove("k").expect("remove");
        assert_eq!(store.get("k"), Ok(None));
        assert!(store.is_empty());
    }
}
