//! Timestamped log entries.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped wrapper around one logged record.
///
/// Entries are created at insertion time with the current timestamp (or an
/// explicit one, for tests) and are immutable afterwards, apart from
/// wholesale replacement by index in the owning [`Log`](crate::Log).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<T> {
    /// The moment the record was logged.
    pub date: DateTime<Utc>,
    /// The logged record itself.
    pub element: T,
}

impl<T> Entry<T> {
    /// Create an entry with an explicit timestamp.
    pub fn new(date: DateTime<Utc>, element: T) -> Self {
        Self { date, element }
    }

    /// Transform the element while keeping the original timestamp.
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Entry<U> {
        Entry {
            date: self.date,
            element: transform(self.element),
        }
    }

    /// Age of this entry relative to `now`.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now.signed_duration_since(self.date)
    }
}
