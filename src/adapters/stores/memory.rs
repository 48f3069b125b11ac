//! In-memory store.
//!
//! Implements both store ports over a shared map. Used for tests and for
//! sessions that must not touch the filesystem.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::StoreResult;
use crate::domain::ports::{SecretStore, StateStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: RwLock::new(entries),
        }
    }

    async fn read(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn write(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl SecretStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read(key).await)
    }

    async fn store(&self, key: &str, value: &str) -> StoreResult<()> {
        self.write(key, value).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read(key).await)
    }

    async fn update(&self, key: &str, value: &str) -> StoreResult<()> {
        self.write(key, value).await;
        Ok(())
    }
}
