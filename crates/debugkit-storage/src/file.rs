//! File-based log persistence.
//!
//! One file per log, serialized as JSON and optionally sealed with
//! symmetric encryption. Writes go to a sibling temp file followed by an
//! atomic rename, so a crash mid-write can never leave a corrupt partial
//! file at the target location.

use std::ffi::OsString;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use debugkit_core::{Log, LogStore, StorageError};
use debugkit_crypto::EncryptionKind;

/// Access restriction applied to the log file as an attribute of the write.
///
/// The unix rendition of a platform data-protection class: the file mode is
/// set before the temp file is moved into place, never checked at runtime.
/// On non-unix targets the permission step is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileProtection {
    /// Readable and writable by the owning user only (0o600).
    #[default]
    Private,
    /// World-readable (0o644), for logs meant to be pulled off the device.
    Shared,
}

impl FileProtection {
    #[cfg(unix)]
    fn mode(self) -> u32 {
        match self {
            Self::Private => 0o600,
            Self::Shared => 0o644,
        }
    }
}

/// File-based implementation of [`LogStore`] for one record type.
///
/// The backend is a stateless adapter over its target location; a single
/// instance/location pair must have exclusive ownership of the file, since
/// atomic replacement protects against partial writes, not concurrent
/// writers.
#[derive(Debug)]
pub struct FileLogStorage<T> {
    path: PathBuf,
    encryption: EncryptionKind,
    protection: FileProtection,
    _record: PhantomData<fn() -> T>,
}

impl<T> FileLogStorage<T> {
    /// Create a backend targeting `path`, unencrypted, with private file
    /// permissions.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encryption: EncryptionKind::None,
            protection: FileProtection::default(),
            _record: PhantomData,
        }
    }

    /// Seal stored bytes with the given encryption mode.
    pub fn with_encryption(mut self, encryption: EncryptionKind) -> Self {
        self.encryption = encryption;
        self
    }

    /// Apply a different protection class to written files.
    pub fn with_protection(mut self, protection: FileProtection) -> Self {
        self.protection = protection;
        self
    }

    /// The target location of this backend.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("log"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl<T> LogStore<T> for FileLogStorage<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn store(&self, log: &Log<T>) -> Result<(), StorageError> {
        let data =
            serde_json::to_vec(log).map_err(|e| StorageError::serialization(e.to_string()))?;
        let sealed = self
            .encryption
            .encrypt(&data)
            .map_err(|e| StorageError::crypto(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &sealed).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(self.protection.mode());
            tokio::fs::set_permissions(&temp_path, permissions).await?;
        }

        // Atomic rename over the target
        tokio::fs::rename(&temp_path, &self.path).await?;

        trace!(path = ?self.path, entries = log.len(), "stored log");
        Ok(())
    }

    async fn retrieve(&self) -> Result<Option<Log<T>>, StorageError> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                // Absence is an empty initial state, not a failure.
                debug!(path = ?self.path, "no stored log");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let plaintext = self
            .encryption
            .decrypt(&data)
            .map_err(|e| StorageError::crypto(e.to_string()))?;
        let log = serde_json::from_slice(&plaintext)
            .map_err(|e| StorageError::corrupted(e.to_string()))?;

        Ok(Some(log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeDelta, Utc};
    use tempfile::TempDir;

    use debugkit_core::{Entry, LogService};
    use debugkit_crypto::SymmetricKey;

    fn storage_in(dir: &TempDir) -> FileLogStorage<String> {
        FileLogStorage::new(dir.path().join("test.log"))
    }

    fn sample_log() -> Log<String> {
        let now = Utc::now();
        Log::from_entries([
            Entry::new(now, "hij".to_string()),
            Entry::new(now - TimeDelta::seconds(1), "def".to_string()),
            Entry::new(now - TimeDelta::seconds(2), "abc".to_string()),
        ])
    }

    #[tokio::test]
    async fn test_retrieve_against_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        assert!(storage.retrieve().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_retrieve_roundtrip_preserves_entries_and_order() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        let log = sample_log();

        storage.store(&log).await.unwrap();
        let retrieved = storage.retrieve().await.unwrap().unwrap();

        assert_eq!(retrieved, log);
    }

    #[tokio::test]
    async fn test_storing_multiple_times_overwrites_previous() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let mut log = Log::new();
        log.insert("first".to_string());
        storage.store(&log).await.unwrap();

        log.insert("second".to_string());
        storage.store(&log).await.unwrap();

        let retrieved = storage.retrieve().await.unwrap().unwrap();
        assert_eq!(retrieved.len(), 2);
    }

    #[tokio::test]
    async fn test_encrypted_roundtrip_preserves_entries_and_order() {
        let dir = TempDir::new().unwrap();
        let key = SymmetricKey::generate();
        let storage =
            storage_in(&dir).with_encryption(EncryptionKind::SymmetricKey(key.clone()));
        let log = sample_log();

        storage.store(&log).await.unwrap();

        // The on-disk bytes are sealed, not plain JSON.
        let raw = tokio::fs::read(storage.path()).await.unwrap();
        assert!(serde_json::from_slice::<Log<String>>(&raw).is_err());

        let reader = FileLogStorage::<String>::new(storage.path())
            .with_encryption(EncryptionKind::SymmetricKey(key));
        let retrieved = reader.retrieve().await.unwrap().unwrap();
        assert_eq!(retrieved, log);
    }

    #[tokio::test]
    async fn test_bit_flip_in_stored_ciphertext_fails_retrieval() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir)
            .with_encryption(EncryptionKind::SymmetricKey(SymmetricKey::generate()));

        storage.store(&sample_log()).await.unwrap();

        let mut raw = tokio::fs::read(storage.path()).await.unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        tokio::fs::write(storage.path(), &raw).await.unwrap();

        let result = storage.retrieve().await;
        assert!(matches!(result, Err(StorageError::Crypto(_))));
    }

    #[tokio::test]
    async fn test_undeserializable_file_fails_as_corruption() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        tokio::fs::write(storage.path(), b"not json at all")
            .await
            .unwrap();

        let result = storage.retrieve().await;
        assert!(matches!(result, Err(StorageError::Corrupted(_))));
    }

    #[tokio::test]
    async fn test_store_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let storage =
            FileLogStorage::<String>::new(dir.path().join("nested/deeper/test.log"));

        storage.store(&sample_log()).await.unwrap();

        assert!(storage.retrieve().await.unwrap().is_some());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_written_file_carries_private_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        storage.store(&sample_log()).await.unwrap();

        let mode = tokio::fs::metadata(storage.path())
            .await
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_service_against_fresh_path_starts_empty_and_persists_inserts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("service.log");

        {
            let storage = FileLogStorage::<String>::new(&path);
            let mut service = LogService::<String>::with_storage(storage).await.unwrap();
            assert!(service.log().is_empty());

            service.insert("first record".to_string()).await;
            assert!(path.exists());
        }

        // A fresh service against the same path reproduces the entry.
        let storage = FileLogStorage::<String>::new(&path);
        let service = LogService::<String>::with_storage(storage).await.unwrap();
        assert_eq!(service.log().len(), 1);
        assert_eq!(service.log().first().unwrap().element, "first record");
    }
}
