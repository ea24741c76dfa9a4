//! In-memory log persistence.
//!
//! Keeps the stored log in process memory, which makes it useful as a
//! substitute backend in tests and interactive previews. Nothing survives
//! the process.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use debugkit_core::{Log, LogStore, StorageError};

/// In-memory implementation of [`LogStore`].
#[derive(Debug)]
pub struct MemoryLogStorage<T> {
    slot: RwLock<Option<Log<T>>>,
}

impl<T> MemoryLogStorage<T> {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl<T> Default for MemoryLogStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> LogStore<T> for MemoryLogStorage<T>
where
    T: Clone + Send + Sync,
{
    async fn store(&self, log: &Log<T>) -> Result<(), StorageError> {
        trace!(entries = log.len(), "stored log in memory");
        *self.slot.write().await = Some(log.clone());
        Ok(())
    }

    async fn retrieve(&self) -> Result<Option<Log<T>>, StorageError> {
        Ok(self.slot.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_retrieve_before_any_store_returns_none() {
        let storage = MemoryLogStorage::<String>::new();
        assert!(storage.retrieve().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_retrieve_roundtrip() {
        let storage = MemoryLogStorage::new();

        let mut log = Log::new();
        log.insert("abc".to_string());
        log.insert("def".to_string());

        storage.store(&log).await.unwrap();
        let retrieved = storage.retrieve().await.unwrap().unwrap();

        assert_eq!(retrieved, log);
    }

    #[tokio::test]
    async fn test_store_replaces_previous_state() {
        let storage = MemoryLogStorage::new();

        let mut log = Log::new();
        log.insert("abc".to_string());
        storage.store(&log).await.unwrap();

        log.clear();
        storage.store(&log).await.unwrap();

        assert!(storage.retrieve().await.unwrap().unwrap().is_empty());
    }
}
