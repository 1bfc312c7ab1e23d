use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use super::session::StoredCredential;

/// File name for the persisted credential. The record is keyed `userToken`
/// to match the record the web storefront keeps in browser storage.
const CREDENTIAL_FILE: &str = "userToken.json";

#[derive(Debug, Error)]
pub enum CredentialStoreError {
    /// Storage held bytes that do not parse as a credential record.
    #[error("stored credential is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Storage itself could not be read or written.
    #[error("credential storage unavailable: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for the single persisted credential record.
///
/// `Session` is the only production consumer; it serializes access, so
/// implementations do not need their own locking. `get` must distinguish
/// "nothing stored" (`Ok(None)`) from "stored but unreadable" (`Err`),
/// because only the latter triggers eviction.
pub trait CredentialStore {
    fn get(&self) -> Result<Option<StoredCredential>, CredentialStoreError>;
    fn set(&mut self, credential: &StoredCredential) -> Result<(), CredentialStoreError>;
    fn delete(&mut self) -> Result<(), CredentialStoreError>;
}

/// Credential persistence in a JSON file under the application data
/// directory. The file holds exactly the serialized credential record,
/// compact, as the web client writes it.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(CREDENTIAL_FILE),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Result<Option<StoredCredential>, CredentialStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let credential = serde_json::from_str(&contents)?;
        Ok(Some(credential))
    }

    fn set(&mut self, credential: &StoredCredential) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(credential)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn delete(&mut self) -> Result<(), CredentialStoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory store holding the raw serialized record, used as the fake
/// storage port in tests and for embedders that manage persistence
/// themselves. Keeping the value as raw bytes lets tests seed malformed
/// state exactly as a corrupted file would present it.
///
/// Clones share the same cell, so a test can keep a handle for inspection
/// after handing the store to a `Session`.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentialStore {
    /// Start empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw value already in storage, well-formed or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The raw stored value, if any.
    pub fn raw(&self) -> Option<String> {
        self.cell().clone()
    }

    fn cell(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.raw.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Result<Option<StoredCredential>, CredentialStoreError> {
        match self.cell().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, credential: &StoredCredential) -> Result<(), CredentialStoreError> {
        let raw = serde_json::to_string(credential)?;
        *self.cell() = Some(raw);
        Ok(())
    }

    fn delete(&mut self) -> Result<(), CredentialStoreError> {
        *self.cell() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "shopwire-test-{}-{}",
            label,
            std::process::id()
        ));
        // Start from a clean slate in case a previous run left state behind.
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_round_trips_compact_json() {
        let dir = scratch_dir("roundtrip");
        let mut store = FileCredentialStore::new(&dir);
        let credential = StoredCredential::new("abc123", 1_750_000_000_000);
        store.set(&credential).expect("writable");

        let on_disk = std::fs::read_to_string(store.path()).expect("file exists");
        assert_eq!(on_disk, r#"{"token":"abc123","expiresAt":1750000000000}"#);

        let loaded = store.get().expect("readable");
        assert_eq!(loaded, Some(credential));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_absent_is_none() {
        let store = FileCredentialStore::new(scratch_dir("absent"));
        assert!(store.get().expect("no file is not an error").is_none());
    }

    #[test]
    fn test_file_store_delete_missing_is_ok() {
        let mut store = FileCredentialStore::new(scratch_dir("delete-missing"));
        store.delete().expect("deleting nothing succeeds");
        store.delete().expect("still succeeds on repeat");
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = scratch_dir("garbage");
        let mut store = FileCredentialStore::new(&dir);
        std::fs::create_dir_all(&dir).expect("scratch dir");
        std::fs::write(store.path(), "{\"token\":\"abc123\"}").expect("seeded");

        assert!(matches!(
            store.get(),
            Err(CredentialStoreError::Malformed(_))
        ));

        store.delete().expect("eviction succeeds");
        assert!(store.get().expect("clean after eviction").is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_set_overwrites() {
        let dir = scratch_dir("overwrite");
        let mut store = FileCredentialStore::new(&dir);
        store
            .set(&StoredCredential::new("first", 1))
            .expect("writable");
        store
            .set(&StoredCredential::new("second", 2))
            .expect("writable");
        let loaded = store.get().expect("readable").expect("present");
        assert_eq!(loaded.token, "second");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_memory_store_surfaces_malformed_raw() {
        let store = MemoryCredentialStore::with_raw("][");
        assert!(matches!(
            store.get(),
            Err(CredentialStoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let mut store = MemoryCredentialStore::default();
        let observer = store.clone();
        store
            .set(&StoredCredential::new("abc123", 42))
            .expect("writable");
        assert_eq!(
            observer.raw().as_deref(),
            Some(r#"{"token":"abc123","expiresAt":42}"#)
        );
    }
}
