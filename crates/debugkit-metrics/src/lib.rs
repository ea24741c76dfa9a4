//! # DebugKit Metrics
//!
//! Serializable metric-payload records for the DebugKit log subsystem.
//!
//! Platform metric providers hand out live payload objects that are
//! awkward to persist: their histogram data may only be enumerable once,
//! and the objects themselves are not serializable. The types here copy
//! the displayed fields out exactly once at construction and keep them as
//! plain immutable values, ready for a
//! [`LogService`](debugkit_core::LogService).
//!
//! ## Key Types
//!
//! - [`Histogram`] / [`Bucket`]: immutable bucketed sample distributions
//! - [`MetricPayload`]: one metrics-collection period, ready for storage
//!
//! ## Example
//!
//! ```rust,ignore
//! use debugkit_metrics::{metric_payloads, MetricPayload};
//!
//! let mut service = metric_payloads(Some("debug/metrics.log".into())).await?;
//! service.insert(payload).await;
//! ```

pub mod histogram;
pub mod payload;
pub mod service;

// Re-exports
pub use histogram::{Bucket, Histogram, MetricUnit};
pub use payload::MetricPayload;
pub use service::metric_payloads;
