//! The storage-facing encryption capability.

use crate::error::CryptoError;
use crate::symmetric_key::SymmetricKey;

/// How a storage backend seals serialized log bytes.
///
/// `None` passes bytes through unchanged in both directions. `SymmetricKey`
/// seals with ChaCha20-Poly1305 and writes the nonce ahead of the
/// ciphertext; decryption is the exact inverse and fails on mismatched or
/// corrupted ciphertext.
#[derive(Debug, Clone, Default)]
pub enum EncryptionKind {
    /// Byte-identical passthrough.
    #[default]
    None,
    /// Authenticated encryption under the given key.
    SymmetricKey(SymmetricKey),
}

impl EncryptionKind {
    /// Seal serialized log bytes for storage.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self {
            Self::None => Ok(plaintext.to_vec()),
            Self::SymmetricKey(key) => Ok(key.encrypt(plaintext)?.to_bytes()),
        }
    }

    /// Unseal stored bytes.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self {
            Self::None => Ok(data.to_vec()),
            Self::SymmetricKey(key) => key.decrypt_bytes(data),
        }
    }
}
