//! Error types for the log core.

use thiserror::Error;

/// Errors from log container mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogError {
    /// An offset was outside the bounds of the log.
    #[error("offset {offset} out of range for log of {len} entries")]
    IndexOutOfRange {
        /// The offending offset.
        offset: usize,
        /// The number of entries at the time of the call.
        len: usize,
    },
}

/// Errors from storage backends.
///
/// Absence of stored data is not an error; backends report it as
/// `Ok(None)` from [`LogStore::retrieve`](crate::LogStore::retrieve).
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O failure reading or writing the backing store.
    #[error("I/O error: {0}")]
    Io(String),

    /// Stored data exists but cannot be deserialized.
    #[error("corrupted log data: {0}")]
    Corrupted(String),

    /// Stored data exists but fails decryption or its integrity check.
    #[error("decryption failed: {0}")]
    Crypto(String),

    /// The log could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    /// Create a new I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Create a new Corrupted error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::Corrupted(message.into())
    }

    /// Create a new Crypto error.
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create a new Serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}
