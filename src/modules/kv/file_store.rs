use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{KeyValueStore, KvError};

/// Key-value store persisted as a single JSON object.
///
/// The whole map is held in memory and rewritten on every change. Writes go
/// to a sibling temp file first and are then renamed over the target.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, Value>>,
}

impl FileKeyValueStore {
    /// Open the store, loading existing entries. A missing file is an empty store.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, KvError> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => HashMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            "Opened settings store {} with {} entries",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, entries: &HashMap<String, Value>) -> Result<(), KvError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(entries)?;
        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), KvError> {
        // The write lock is held across the flush, and the map is only
        // replaced once the file write succeeded
        let mut entries = self.entries.write().await;
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value);
        self.flush(&updated).await?;
        *entries = updated;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, KvError> {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(key) {
            return Ok(false);
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.flush(&updated).await?;
        *entries = updated;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(dir.path().join("settings.json"))
            .await
            .unwrap();
        assert!(store.get("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let store = FileKeyValueStore::open(&path).await.unwrap();
        store
            .set("photo_export:anna@example.se", json!({"autoSync": true}))
            .await
            .unwrap();
        store.set("preferences:anna@example.se", json!({"theme": "light"})).await.unwrap();
        assert!(store.remove("preferences:anna@example.se").await.unwrap());

        let reopened = FileKeyValueStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("photo_export:anna@example.se").await.unwrap(),
            Some(json!({"autoSync": true}))
        );
        assert!(reopened
            .get("preferences:anna@example.se")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let result = FileKeyValueStore::open(&path).await;
        assert!(matches!(result, Err(KvError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_entries_unchanged() {
        let dir = TempDir::new().unwrap();
        let parent = dir.path().join("sub");
        let store = FileKeyValueStore::open(parent.join("settings.json"))
            .await
            .unwrap();
        store.set("kept", json!(1)).await.unwrap();

        // The settings directory turns into a plain file, so every write fails
        tokio::fs::remove_dir_all(&parent).await.unwrap();
        tokio::fs::write(&parent, b"").await.unwrap();

        assert!(matches!(
            store.set("lost", json!(2)).await,
            Err(KvError::Io(_))
        ));
        assert!(store.get("lost").await.unwrap().is_none());

        assert!(store.remove("kept").await.is_err());
        assert_eq!(store.get("kept").await.unwrap(), Some(json!(1)));
    }
}
