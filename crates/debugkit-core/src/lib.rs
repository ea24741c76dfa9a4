//! # DebugKit Core
//!
//! Core log container, expiration policy, and observable log service for
//! the DebugKit in-app debugging toolkit.
//!
//! This crate provides the UI-independent heart of the toolkit: a generic,
//! append-oriented, time-bounded record store, plus the observable service
//! that mediates between record producers (crash reporters, notification
//! centers, metric subsystems) and the log itself.
//!
//! ## Key Types
//!
//! - [`Log`]: ordered, newest-first collection of timestamped [`Entry`] values
//! - [`ExpirationInterval`]: bounded-retention policy applied when trimming
//! - [`LogService`]: the sole mutator and observable owner of one [`Log`]
//!
//! ## Key Traits
//!
//! - [`Recordable`]: maps a live producer value to its serializable record
//! - [`LogStore`]: pluggable persistence capability (file, memory, fake)
//!
//! ## Example
//!
//! ```rust,ignore
//! use debugkit_core::LogService;
//!
//! #[tokio::main]
//! async fn main() {
//!     // An ephemeral, in-memory service for string records.
//!     let mut service = LogService::<String>::new();
//!     service.insert("signed in".to_string()).await;
//!
//!     // Newest first.
//!     assert_eq!(service.log().first().unwrap().element, "signed in");
//! }
//! ```

pub mod entry;
pub mod error;
pub mod expiration;
pub mod log;
pub mod recordable;
pub mod service;
pub mod store;

// Re-export main types
pub use entry::Entry;
pub use error::{LogError, StorageError};
pub use expiration::ExpirationInterval;
pub use log::Log;
pub use recordable::Recordable;
pub use service::LogService;
pub use store::LogStore;
