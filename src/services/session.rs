//! Authenticated session.
//!
//! A [`Session`] owns the handles every issue operation depends on: the
//! host's secret and state stores and the tracker client built from the
//! stored API key. Sessions are explicit values, so tests and embedders
//! can run several isolated ones side by side.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::errors::{TrackerError, TrackerResult};
use crate::domain::ports::{IssueTracker, SecretStore, StateStore, TrackerConnector};
use crate::services::context::ContextPointer;

/// Secret store key holding the API key.
pub const API_KEY_SECRET: &str = "apiKey";

pub struct Session {
    secrets: Arc<dyn SecretStore>,
    context: ContextPointer,
    connector: Arc<dyn TrackerConnector>,
    tracker: RwLock<Option<Arc<dyn IssueTracker>>>,
}

impl Session {
    /// Create an uninitialized session. Call [`initialize`](Self::initialize)
    /// to pick up a previously stored API key.
    pub fn new(
        secrets: Arc<dyn SecretStore>,
        state: Arc<dyn StateStore>,
        connector: Arc<dyn TrackerConnector>,
    ) -> Self {
        Self {
            secrets,
            context: ContextPointer::new(state),
            connector,
            tracker: RwLock::new(None),
        }
    }

    /// Load the stored API key and build a client bound to it.
    ///
    /// Returns whether a key was found, not whether it is valid: no
    /// credential check is made against the remote. Store failures are
    /// logged and leave the session uninitialized.
    pub async fn initialize(&self) -> bool {
        let api_key = match self.secrets.get(API_KEY_SECRET).await {
            Ok(key) => key.filter(|k| !k.is_empty()),
            Err(e) => {
                tracing::error!(error = %e, "failed to read stored API key");
                None
            }
        };

        let Some(api_key) = api_key else {
            tracing::info!("no API key stored; session not initialized");
            *self.tracker.write().await = None;
            return false;
        };

        self.install_client(&api_key).await;
        true
    }

    /// Persist a new API key and rebuild the client with it immediately.
    pub async fn store_api_key(&self, api_key: &str) -> TrackerResult<()> {
        if api_key.trim().is_empty() {
            return Err(TrackerError::InvalidInput("API key is empty".to_string()));
        }

        self.secrets
            .store(API_KEY_SECRET, api_key)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to store API key");
                TrackerError::from(e)
            })?;

        self.install_client(api_key).await;
        Ok(())
    }

    async fn install_client(&self, api_key: &str) {
        let client = self.connector.connect(api_key);
        *self.tracker.write().await = Some(client);
        tracing::debug!("tracker client installed");
    }

    /// The tracker client, or [`TrackerError::NotInitialized`].
    pub async fn tracker(&self) -> TrackerResult<Arc<dyn IssueTracker>> {
        self.tracker.read().await.clone().ok_or_else(|| {
            tracing::warn!("no initialized Linear client found");
            TrackerError::NotInitialized
        })
    }

    pub async fn is_initialized(&self) -> bool {
        self.tracker.read().await.is_some()
    }

    /// The context issue pointer bound to this session's state store.
    pub const fn context(&self) -> &ContextPointer {
        &self.context
    }
}
