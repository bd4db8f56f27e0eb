//! Durable key-value storage for rating data.
//!
//! The rating store persists its collection through the [`KeyValueStore`]
//! trait: a synchronous get/set/remove byte store with no further semantics.
//! Two implementations are provided: [`DirectoryStore`] keeps one file per
//! key inside a capability-scoped directory, and [`MemoryStore`] backs tests
//! and the degraded no-persistence bootstrap path.

mod directory_store;
mod error;
mod memory_store;

pub use directory_store::DirectoryStore;
pub use error::PersistenceError;
pub use memory_store::MemoryStore;

/// Synchronous byte-oriented key-value storage.
///
/// Absence is not an error: `get` returns `Ok(None)` for a missing key and
/// `remove` succeeds when there is nothing to remove.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send {
    /// Returns the stored bytes for `key`, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::ReadFailed`] when the value exists but
    /// cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::WriteFailed`] when the value cannot be
    /// written.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), PersistenceError>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::RemoveFailed`] when an existing value
    /// cannot be removed.
    fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}

// Lets callers share one backend between an owner and an observer, which
// tests rely on to inspect persisted blobs.
impl<T: KeyValueStore + Sync> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        T::get(self, key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), PersistenceError> {
        T::set(self, key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        T::remove(self, key)
    }
}
