//! Key-value persistence backends.
//!
//! The history store persists its whole collection as one blob under a
//! fixed key. The backend is injected, so tests run against an in-memory
//! double and the CLI against files in the XDG data directory.

use crate::error::{StorageError, StorageResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;

/// Storage key for the scan-history collection blob.
pub const SCAN_HISTORY_KEY: &str = "scan_history";

/// Storage key for application settings, distinct from the history key.
pub const APP_SETTINGS_KEY: &str = "app_settings";

/// A minimal async key-value store.
///
/// `get` distinguishes an absent key (`Ok(None)`) from a read failure, so
/// callers can tell a legitimately empty store from a broken one.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key` and its value. Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// File-per-key backend rooted in a single directory.
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        Ok(Self { dir })
    }

    fn key_file(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueBackend for JsonFileBackend {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file = self.key_file(key);
        match fs::read_to_string(&file).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let file = self.key_file(key);
        fs::write(&file, value)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let file = self.key_file(key);
        match fs::remove_file(&file).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed(e.to_string())),
        }
    }
}

/// In-memory backend, the documented test double.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, bypassing the trait. Useful for corruption tests.
    pub fn seed(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueBackend for MemoryBackend {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("missing").await.unwrap(), None);

        backend.set("k", "v").await.unwrap();
        assert_eq!(backend.get("k").await.unwrap(), Some("v".to_string()));

        backend.remove("k").await.unwrap();
        assert_eq!(backend.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_backend_remove_absent_is_noop() {
        let backend = MemoryBackend::new();
        assert!(backend.remove("never-set").await.is_ok());
    }

    #[tokio::test]
    async fn test_file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path()).unwrap();

        assert_eq!(backend.get(SCAN_HISTORY_KEY).await.unwrap(), None);

        backend.set(SCAN_HISTORY_KEY, "[]").await.unwrap();
        assert_eq!(
            backend.get(SCAN_HISTORY_KEY).await.unwrap(),
            Some("[]".to_string())
        );

        backend.remove(SCAN_HISTORY_KEY).await.unwrap();
        assert_eq!(backend.get(SCAN_HISTORY_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_backend_keys_are_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path()).unwrap();

        backend.set(SCAN_HISTORY_KEY, "[]").await.unwrap();
        backend.set(APP_SETTINGS_KEY, "{}").await.unwrap();

        assert!(dir.path().join("scan_history.json").exists());
        assert!(dir.path().join("app_settings.json").exists());
    }
}
