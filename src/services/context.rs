//! Context issue pointer.
//!
//! The "context issue" is the single issue the user is currently working
//! on. Its remote id lives in one slot of the state store; this is the
//! only code that reads or writes that slot.

use std::sync::Arc;

use crate::domain::errors::{TrackerError, TrackerResult};
use crate::domain::ports::StateStore;

/// State store key holding the context issue id.
pub const CONTEXT_ISSUE_KEY: &str = "linearContextIssueId";

/// Accessor/mutator pair for the persisted context issue id.
///
/// Writes are last-write-wins with no versioning. There is no way to
/// clear the slot once set.
#[derive(Clone)]
pub struct ContextPointer {
    store: Arc<dyn StateStore>,
}

impl ContextPointer {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Current context issue id, or `None` when never set.
    ///
    /// An empty stored value is treated as unset. The id is not checked
    /// against the remote; a stale id only fails when dereferenced.
    pub async fn get(&self) -> TrackerResult<Option<String>> {
        let value = self.store.get(CONTEXT_ISSUE_KEY).await.map_err(|e| {
            tracing::error!(error = %e, "failed to read context issue id");
            TrackerError::from(e)
        })?;
        Ok(value.filter(|v| !v.is_empty()))
    }

    /// Current context issue id, failing with [`TrackerError::NoContextIssue`] when unset.
    pub async fn require(&self) -> TrackerResult<String> {
        self.get().await?.ok_or(TrackerError::NoContextIssue)
    }

    /// Overwrite the context issue id.
    ///
    /// Empty or absent ids are rejected and leave the slot untouched.
    pub async fn set(&self, issue_id: Option<&str>) -> TrackerResult<()> {
        let issue_id = issue_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| TrackerError::InvalidInput("context issue id is empty".to_string()))?;

        self.store
            .update(CONTEXT_ISSUE_KEY, issue_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, issue_id, "failed to set context issue id");
                TrackerError::from(e)
            })?;

        tracing::info!(issue_id, "context issue set");
        Ok(())
    }
}
