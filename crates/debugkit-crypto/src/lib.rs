//! # DebugKit Crypto
//!
//! Symmetric authenticated encryption for DebugKit log storage.
//!
//! Stored debug logs can carry sensitive payloads (notification contents,
//! device metrics), so the file backend optionally seals them with
//! ChaCha20-Poly1305 AEAD. Every encryption call uses a fresh random nonce,
//! which makes the operation non-deterministic: encrypting identical
//! plaintexts twice yields distinct ciphertexts. Decryption authenticates
//! the ciphertext and fails on any tampering.
//!
//! ## Key Types
//!
//! - [`SymmetricKey`]: a 256-bit key, zeroized on drop
//! - [`EncryptedData`]: the nonce + ciphertext envelope written to disk
//! - [`EncryptionKind`]: the storage-facing capability (none / symmetric key)

pub mod encryption;
pub mod error;
pub mod symmetric_key;

// Re-exports
pub use encryption::EncryptionKind;
pub use error::CryptoError;
pub use symmetric_key::{EncryptedData, SymmetricKey, KEY_SIZE, NONCE_SIZE};
