//! Secret and state store ports.
//!
//! Both stores are owned by the host environment. The secret store holds
//! credentials; the state store holds small pieces of workspace state
//! such as the context issue id.

use async_trait::async_trait;

use crate::domain::errors::StoreResult;

/// Store for opaque secrets (API keys).
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Read a secret. `None` when the key was never stored.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store a secret, replacing any previous value.
    async fn store(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a secret. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;
}

/// Persistent key-value store for workspace state.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read a value. `None` when the key was never written.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite a value.
    async fn update(&self, key: &str, value: &str) -> StoreResult<()>;
}
