//! The pluggable storage capability.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::log::Log;

/// Durable persistence for one record type's log.
///
/// Implementations are interchangeable behind this trait; the owning
/// [`LogService`](crate::LogService) never learns which backend it is
/// talking to. `retrieve` distinguishes confirmed absence (`Ok(None)`,
/// a valid initial state) from a genuine read failure (`Err`), which a
/// backend must never silently discard.
#[async_trait]
pub trait LogStore<T>: Send + Sync {
    /// Persist the full log, atomically replacing any previously stored
    /// state.
    async fn store(&self, log: &Log<T>) -> Result<(), StorageError>;

    /// Load the previously stored log, or `None` if nothing was ever
    /// stored at this location.
    async fn retrieve(&self) -> Result<Option<Log<T>>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn LogStore<String>) {}
}
