//! # DebugKit Storage
//!
//! Storage backends for DebugKit logs.
//!
//! This crate provides the concrete implementations of the
//! [`LogStore`](debugkit_core::LogStore) capability:
//!
//! - **[`FileLogStorage`]**: file-based persistence with atomic overwrite,
//!   optional symmetric encryption, and restrictive file permissions
//! - **[`MemoryLogStorage`]**: ephemeral in-memory persistence for tests
//!   and previews
//!
//! ## Example
//!
//! ```rust,ignore
//! use debugkit_core::LogService;
//! use debugkit_crypto::{EncryptionKind, SymmetricKey};
//! use debugkit_storage::FileLogStorage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = FileLogStorage::new("debug/notifications.log")
//!         .with_encryption(EncryptionKind::SymmetricKey(SymmetricKey::generate()));
//!
//!     let mut service = LogService::<String>::with_storage(storage).await?;
//!     service.insert("push received".to_string()).await;
//!     Ok(())
//! }
//! ```

pub mod file;
pub mod memory;

// Re-exports
pub use file::{FileLogStorage, FileProtection};
pub use memory::MemoryLogStorage;

// Re-export the capability trait from debugkit-core for convenience
pub use debugkit_core::LogStore;
