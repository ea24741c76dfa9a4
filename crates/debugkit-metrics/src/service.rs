//! Convenience constructor for metric log services.

use std::path::PathBuf;

use debugkit_core::{LogService, StorageError};
use debugkit_storage::FileLogStorage;

use crate::payload::MetricPayload;

/// Build a metric-payload log service.
///
/// With a path, the service persists to that file and adopts any log
/// already stored there; without one it is ephemeral.
pub async fn metric_payloads(
    path: Option<PathBuf>,
) -> Result<LogService<MetricPayload>, StorageError> {
    match path {
        Some(path) => LogService::with_storage(FileLogStorage::new(path)).await,
        None => Ok(LogService::new()),
    }
}
