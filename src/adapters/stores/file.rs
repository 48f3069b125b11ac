//! JSON file-backed store.
//!
//! Each store is a single JSON object on disk. The file is re-read on
//! every access and rewritten whole on every write (temp file + rename),
//! so a missing file is simply an empty store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::StoreResult;
use crate::domain::ports::{SecretStore, StateStore};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Restrict the file to owner read/write (unix only).
    private: bool,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store for workspace state.
    pub fn state(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            private: false,
            write_lock: Mutex::new(()),
        }
    }

    /// Store for secrets; the file is created with 0600 permissions.
    pub fn secrets(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            private: true,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        let raw = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&tmp, raw).await?;

        #[cfg(unix)]
        if self.private {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600)).await?;
        }

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn read_key(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load().await?.get(key).cloned())
    }

    async fn modify<F>(&self, f: F) -> StoreResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        f(&mut entries);
        self.save(&entries).await
    }
}

#[async_trait]
impl SecretStore for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.read_key(key).await
    }

    async fn store(&self, key: &str, value: &str) -> StoreResult<()> {
        tracing::debug!(path = %self.path.display(), key, "storing secret");
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
        .await
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.modify(|entries| {
            entries.remove(key);
        })
        .await
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.read_key(key).await
    }

    async fn update(&self, key: &str, value: &str) -> StoreResult<()> {
        tracing::debug!(path = %self.path.display(), key, value, "updating state");
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
        .await
    }
}
