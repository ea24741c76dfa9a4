//! # DebugKit Notifications
//!
//! Serializable notification records for the DebugKit log subsystem.
//!
//! Delivered platform notifications are live OS objects that cannot be
//! persisted as-is. [`NotificationContent`] copies the displayed fields
//! out of the platform object once, at the point of delivery, and
//! converts into the [`NotificationRecord`] summary that a
//! [`LogService`](debugkit_core::LogService) stores and replays.
//!
//! ## Example
//!
//! ```rust,ignore
//! use debugkit_notifications::{notifications, NotificationContent, NotificationOrigin};
//!
//! let mut service = notifications(Some("debug/notifications.log".into())).await?;
//!
//! let content = NotificationContent::new(
//!     NotificationOrigin::Push,
//!     "com.example.offers",
//!     "Sale",
//!     "",
//!     "Everything is 20% off today.",
//! );
//! service.insert(content).await;
//! ```

pub mod record;
pub mod service;

// Re-exports
pub use record::{NotificationContent, NotificationOrigin, NotificationRecord};
pub use service::notifications;
