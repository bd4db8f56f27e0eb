//! Error types for key-value persistence operations.

use thiserror::Error;

/// Errors returned while opening or accessing the key-value store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// Opening or creating the storage directory failed.
    #[error("failed to open storage directory '{path}': {message}")]
    OpenFailed {
        /// Directory the store attempted to open.
        path: String,
        /// Error detail from the filesystem.
        message: String,
    },

    /// Reading a stored value failed for a reason other than absence.
    #[error("failed to read key '{key}': {message}")]
    ReadFailed {
        /// Key that was being read.
        key: String,
        /// Error detail from the filesystem.
        message: String,
    },

    /// Writing a value failed.
    #[error("failed to write key '{key}': {message}")]
    WriteFailed {
        /// Key that was being written.
        key: String,
        /// Error detail from the filesystem.
        message: String,
    },

    /// Removing a value failed for a reason other than absence.
    #[error("failed to remove key '{key}': {message}")]
    RemoveFailed {
        /// Key that was being removed.
        key: String,
        /// Error detail from the filesystem.
        message: String,
    },
}
