//! Immutable histogram value types.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Unit of the values bucketed by a histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricUnit {
    /// Durations in seconds.
    Seconds,
    /// Durations in milliseconds.
    Milliseconds,
    /// Cellular signal strength in bars.
    SignalBars,
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds => write!(f, "s"),
            Self::Milliseconds => write!(f, "ms"),
            Self::SignalBars => write!(f, "bars"),
        }
    }
}

/// One contiguous value range and the number of samples that fell in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Lower bound of the bucket's range.
    pub start: f64,
    /// Upper bound of the bucket's range.
    pub end: f64,
    /// Number of samples in the range.
    pub count: u64,
}

impl Bucket {
    /// Create a bucket covering `start..=end` with `count` samples.
    pub fn new(start: f64, end: f64, count: u64) -> Self {
        Self { start, end, count }
    }

    /// This bucket's frequency normalized against the busiest bucket's
    /// count, for proportional bar rendering.
    pub fn unit_value(&self, relative_to_max: f64) -> f64 {
        if relative_to_max == 0.0 {
            return 0.0;
        }
        self.count as f64 / relative_to_max
    }

    /// A display label for the bucket's range.
    ///
    /// Single-valued buckets collapse to one number.
    pub fn label(&self, unit: MetricUnit) -> String {
        if self.start != self.end {
            format!("{} {unit} - {} {unit}", self.start, self.end)
        } else {
            format!("{} {unit}", self.start)
        }
    }
}

/// An immutable set of histogram buckets.
///
/// Bucket data is read exactly once at construction and cached as plain
/// values; upstream metric providers may expose their buckets through a
/// single-shot enumerator, so nothing here goes back to the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    unit: MetricUnit,
    buckets: Vec<Bucket>,
}

impl Histogram {
    /// Build a histogram by draining `buckets` once.
    pub fn from_buckets(unit: MetricUnit, buckets: impl IntoIterator<Item = Bucket>) -> Self {
        Self {
            unit,
            buckets: buckets.into_iter().collect(),
        }
    }

    /// Unit of the bucketed values.
    pub fn unit(&self) -> MetricUnit {
        self.unit
    }

    /// The buckets, in source order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// The span from the lowest bucket start to the highest bucket end,
    /// or `None` for an empty histogram.
    pub fn value_range(&self) -> Option<RangeInclusive<f64>> {
        let min = self.buckets.iter().map(|b| b.start).reduce(f64::min)?;
        let max = self.buckets.iter().map(|b| b.end).reduce(f64::max)?;
        Some(min..=max)
    }

    /// The bucket holding the most samples.
    pub fn highest_frequency_bucket(&self) -> Option<&Bucket> {
        self.buckets.iter().max_by_key(|b| b.count)
    }

    /// Total number of samples across all buckets.
    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }
}
