//! Error types for debugkit-crypto.

use thiserror::Error;

/// Errors that can occur during encryption or decryption.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Encryption failed.
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption or integrity verification failed.
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    /// A key had the wrong size or format.
    #[error("invalid key: {0}")]
    InvalidKey(String),
}
