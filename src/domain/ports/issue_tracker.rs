//! Issue tracker port traits.
//!
//! The services talk to the remote tracker exclusively through
//! [`IssueTracker`]. Each method maps to exactly one remote call; there is
//! no caching, retry, or pagination beyond the first page the remote
//! returns.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::TrackerResult;
use crate::domain::models::{
    CommentPayload, Issue, IssueCreate, IssuePayload, IssueUpdate, PriorityValue, Team, User,
    WorkflowState,
};

/// Remote API surface consumed by the issue service.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch the authenticated user.
    async fn viewer(&self) -> TrackerResult<User>;

    /// Fetch the issues assigned to the authenticated user.
    async fn viewer_assigned_issues(&self) -> TrackerResult<Vec<Issue>>;

    /// Fetch a single issue by opaque id or human-readable identifier.
    ///
    /// Returns [`TrackerError::NotFound`](crate::domain::errors::TrackerError::NotFound)
    /// when the remote has no such issue, distinct from transport failures.
    async fn issue(&self, id_or_identifier: &str) -> TrackerResult<Issue>;

    /// Fetch all workflow states visible to the user.
    async fn workflow_states(&self) -> TrackerResult<Vec<WorkflowState>>;

    /// Fetch the teams the authenticated user belongs to.
    async fn viewer_teams(&self) -> TrackerResult<Vec<Team>>;

    /// Fetch the members of a team.
    async fn team_members(&self, team_id: &str) -> TrackerResult<Vec<User>>;

    /// Fetch the workspace's priority scale.
    async fn priority_values(&self) -> TrackerResult<Vec<PriorityValue>>;

    /// Create a comment on an issue.
    async fn create_comment(&self, issue_id: &str, body: &str) -> TrackerResult<CommentPayload>;

    /// Update fields of an issue.
    async fn update_issue(&self, issue_id: &str, update: &IssueUpdate)
        -> TrackerResult<IssuePayload>;

    /// Create an issue.
    async fn create_issue(&self, input: &IssueCreate) -> TrackerResult<IssuePayload>;
}

/// Builds a tracker client bound to an API key.
///
/// Constructing a client performs no network round trip; an invalid key
/// surfaces on the first remote call.
pub trait TrackerConnector: Send + Sync {
    fn connect(&self, api_key: &str) -> Arc<dyn IssueTracker>;
}
