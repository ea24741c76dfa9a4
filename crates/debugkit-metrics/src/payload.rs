//! Metric payload records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use debugkit_core::Recordable;

use crate::histogram::Histogram;

/// A serializable summary of one metrics-collection period.
///
/// Built by copying the displayed fields out of a provider's payload at
/// construction time; the live provider object is never retained. All
/// histogram data sets are optional, since providers only report the
/// metrics that were observed during the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPayload {
    /// Stable identity of this payload.
    pub id: Uuid,
    /// Start of the collection period.
    pub begin: DateTime<Utc>,
    /// End of the collection period.
    pub end: DateTime<Utc>,
    /// Application version the metrics were collected under.
    pub application_version: String,
    /// OS version the metrics were collected under.
    pub os_version: Option<String>,
    /// Application resume time distribution.
    pub resume_time: Option<Histogram>,
    /// Main-thread hang time distribution.
    pub hang_time: Option<Histogram>,
    /// Cold-launch time-to-first-draw distribution.
    pub time_to_first_draw: Option<Histogram>,
    /// Time-to-first-draw distribution for pre-warmed launches.
    pub optimized_time_to_first_draw: Option<Histogram>,
    /// Cellular condition distribution.
    pub cellular_conditions: Option<Histogram>,
}

impl MetricPayload {
    /// Create a payload for the given collection period with no metric
    /// data sets attached.
    pub fn new(
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        application_version: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            begin,
            end,
            application_version: application_version.into(),
            os_version: None,
            resume_time: None,
            hang_time: None,
            time_to_first_draw: None,
            optimized_time_to_first_draw: None,
            cellular_conditions: None,
        }
    }

    /// Set the OS version string.
    pub fn with_os_version(mut self, os_version: impl Into<String>) -> Self {
        self.os_version = Some(os_version.into());
        self
    }

    /// Attach the resume time distribution.
    pub fn with_resume_time(mut self, histogram: Histogram) -> Self {
        self.resume_time = Some(histogram);
        self
    }

    /// Attach the hang time distribution.
    pub fn with_hang_time(mut self, histogram: Histogram) -> Self {
        self.hang_time = Some(histogram);
        self
    }

    /// Attach the cold-launch time-to-first-draw distribution.
    pub fn with_time_to_first_draw(mut self, histogram: Histogram) -> Self {
        self.time_to_first_draw = Some(histogram);
        self
    }

    /// Attach the pre-warmed time-to-first-draw distribution.
    pub fn with_optimized_time_to_first_draw(mut self, histogram: Histogram) -> Self {
        self.optimized_time_to_first_draw = Some(histogram);
        self
    }

    /// Attach the cellular condition distribution.
    pub fn with_cellular_conditions(mut self, histogram: Histogram) -> Self {
        self.cellular_conditions = Some(histogram);
        self
    }

    /// Number of metric data sets present in this payload.
    pub fn metric_count(&self) -> usize {
        [
            self.resume_time.is_some(),
            self.hang_time.is_some(),
            self.time_to_first_draw.is_some(),
            self.optimized_time_to_first_draw.is_some(),
            self.cellular_conditions.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

impl Recordable for MetricPayload {
    type Record = Self;

    fn into_record(self) -> Self::Record {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::{Bucket, MetricUnit};

    fn histogram() -> Histogram {
        Histogram::from_buckets(MetricUnit::Seconds, [Bucket::new(0.0, 1.0, 2)])
    }

    #[test]
    fn test_metric_count_reflects_attached_data_sets() {
        let begin = Utc::now();
        let end = begin + chrono::TimeDelta::hours(24);

        let payload = MetricPayload::new(begin, end, "10.0.0");
        assert_eq!(payload.metric_count(), 0);

        let payload = payload
            .with_resume_time(histogram())
            .with_hang_time(histogram())
            .with_time_to_first_draw(histogram());
        assert_eq!(payload.metric_count(), 3);
    }

    #[test]
    fn test_payloads_have_distinct_identities() {
        let now = Utc::now();
        let a = MetricPayload::new(now, now, "1.0");
        let b = MetricPayload::new(now, now, "1.0");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_payload_serializes_losslessly() {
        let begin = Utc::now();
        let payload = MetricPayload::new(begin, begin + chrono::TimeDelta::hours(1), "10.0.0")
            .with_os_version("17.2")
            .with_hang_time(histogram());

        let json = serde_json::to_string(&payload).unwrap();
        let decoded: MetricPayload = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, payload);
    }
}
