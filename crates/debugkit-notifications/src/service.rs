//! Convenience constructor for notification log services.

use std::path::PathBuf;

use debugkit_core::{LogService, StorageError};
use debugkit_storage::FileLogStorage;

use crate::record::NotificationContent;

/// Build a notification log service.
///
/// With a path, the service persists to that file and adopts any log
/// already stored there; without one it is ephemeral.
pub async fn notifications(
    path: Option<PathBuf>,
) -> Result<LogService<NotificationContent>, StorageError> {
    match path {
        Some(path) => LogService::with_storage(FileLogStorage::new(path)).await,
        None => Ok(LogService::new()),
    }
}
