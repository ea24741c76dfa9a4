//! Bounded-retention policy for log entries.

use chrono::{DateTime, TimeDelta, Utc};

use crate::log::Log;

/// The maximum age an entry may reach before trimming removes it.
///
/// An interval of `none` disables trimming entirely: the log grows without
/// bound until a caller clears or removes entries explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationInterval {
    interval: Option<TimeDelta>,
}

impl ExpirationInterval {
    /// Create a policy with an explicit interval; `None` disables trimming.
    pub fn new(interval: Option<TimeDelta>) -> Self {
        Self { interval }
    }

    /// No expiration; entries are retained indefinitely.
    pub fn none() -> Self {
        Self::new(None)
    }

    /// Entries expire after one hour.
    pub fn one_hour() -> Self {
        Self::new(Some(TimeDelta::hours(1)))
    }

    /// Entries expire after one day.
    pub fn one_day() -> Self {
        Self::new(Some(TimeDelta::hours(24)))
    }

    /// Entries expire after one week.
    pub fn one_week() -> Self {
        Self::new(Some(TimeDelta::hours(24 * 7)))
    }

    /// The configured interval, if any.
    pub fn interval(&self) -> Option<TimeDelta> {
        self.interval
    }

    /// Trim `log` against this policy, measuring ages from `from`.
    pub fn trim<T>(&self, log: &mut Log<T>, from: DateTime<Utc>) {
        if let Some(interval) = self.interval {
            log.trim_entries(interval, from);
        }
    }
}

impl Default for ExpirationInterval {
    fn default() -> Self {
        Self::one_week()
    }
}
