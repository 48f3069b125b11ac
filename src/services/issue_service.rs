//! Issue service implementing the user-facing issue operations.
//!
//! Every operation requires an initialized [`Session`], performs at most
//! one remote call per step, and returns a [`TrackerResult`] whose error
//! variant says which precondition or remote step failed. Failures are
//! logged here, once, with the operation name as a structured field.

use std::sync::Arc;

use crate::domain::errors::{TrackerError, TrackerResult};
use crate::domain::models::{
    Issue, IssueCreate, IssuePayload, IssueUpdate, PriorityValue, Team, User, WorkflowState,
};
use crate::services::session::Session;

/// Workflow state type Linear uses for "in progress" states.
const STARTED_STATE_TYPE: &str = "started";

/// Log a failed operation at a level matching its cause and hand the error back.
fn failed(operation: &'static str, err: TrackerError) -> TrackerError {
    match &err {
        TrackerError::Transport(_) | TrackerError::Api(_) | TrackerError::Store(_) => {
            tracing::error!(operation, kind = err.kind(), error = %err, "operation failed");
        }
        TrackerError::NotFound(_) => {
            tracing::info!(operation, error = %err, "entity not found");
        }
        TrackerError::NotInitialized
        | TrackerError::InvalidInput(_)
        | TrackerError::NoContextIssue => {
            tracing::warn!(operation, kind = err.kind(), error = %err, "operation rejected");
        }
    }
    err
}

fn require_non_empty(operation: &'static str, field: &str, value: &str) -> TrackerResult<()> {
    if value.trim().is_empty() {
        return Err(failed(
            operation,
            TrackerError::InvalidInput(format!("{field} must not be empty")),
        ));
    }
    Ok(())
}

pub struct IssueService {
    session: Arc<Session>,
}

impl IssueService {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch the authenticated user.
    pub async fn whoami(&self) -> TrackerResult<User> {
        const OP: &str = "whoami";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        tracker.viewer().await.map_err(|e| failed(OP, e))
    }

    /// Issues assigned to the authenticated user (first page only).
    pub async fn list_my_issues(&self) -> TrackerResult<Vec<Issue>> {
        const OP: &str = "list_my_issues";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        let issues = tracker
            .viewer_assigned_issues()
            .await
            .map_err(|e| failed(OP, e))?;
        tracing::debug!(count = issues.len(), "fetched assigned issues");
        Ok(issues)
    }

    /// Resolve a human-readable identifier such as `ENG-123`.
    ///
    /// A missing issue is [`TrackerError::NotFound`], distinct from
    /// transport and API failures.
    pub async fn find_issue_by_identifier(&self, identifier: &str) -> TrackerResult<Issue> {
        const OP: &str = "find_issue_by_identifier";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        require_non_empty(OP, "identifier", identifier)?;
        tracker
            .issue(identifier.trim())
            .await
            .map_err(|e| failed(OP, e))
    }

    /// All workflow states, in remote order.
    pub async fn list_workflow_states(&self) -> TrackerResult<Vec<WorkflowState>> {
        const OP: &str = "list_workflow_states";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        tracker.workflow_states().await.map_err(|e| failed(OP, e))
    }

    /// Teams the authenticated user belongs to, in remote order.
    pub async fn list_my_teams(&self) -> TrackerResult<Vec<Team>> {
        const OP: &str = "list_my_teams";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        tracker.viewer_teams().await.map_err(|e| failed(OP, e))
    }

    /// Members of `team`, in remote order.
    pub async fn list_team_members(&self, team: &Team) -> TrackerResult<Vec<User>> {
        const OP: &str = "list_team_members";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        tracker
            .team_members(&team.id)
            .await
            .map_err(|e| failed(OP, e))
    }

    /// The workspace's priority scale, in remote order.
    pub async fn list_available_priorities(&self) -> TrackerResult<Vec<PriorityValue>> {
        const OP: &str = "list_available_priorities";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        tracker.priority_values().await.map_err(|e| failed(OP, e))
    }

    /// Stored context issue id, if any.
    pub async fn context_issue_id(&self) -> TrackerResult<Option<String>> {
        self.session
            .context()
            .get()
            .await
            .map_err(|e| failed("context_issue_id", e))
    }

    /// Overwrite the context issue id. Empty or absent ids are rejected.
    pub async fn set_context_issue_id(&self, issue_id: Option<&str>) -> TrackerResult<()> {
        self.session
            .context()
            .set(issue_id)
            .await
            .map_err(|e| failed("set_context_issue_id", e))
    }

    /// Make `issue` the context issue.
    pub async fn select_issue(&self, issue: &Issue) -> TrackerResult<()> {
        self.set_context_issue_id(Some(&issue.id)).await
    }

    /// Resolve `identifier` and make it the context issue.
    pub async fn select_issue_by_identifier(&self, identifier: &str) -> TrackerResult<Issue> {
        let issue = self.find_issue_by_identifier(identifier).await?;
        self.select_issue(&issue).await?;
        Ok(issue)
    }

    /// Fetch the context issue.
    ///
    /// `Ok(None)` when no context is set. A stored id whose issue no longer
    /// exists upstream yields [`TrackerError::NotFound`].
    pub async fn get_context_issue(&self) -> TrackerResult<Option<Issue>> {
        const OP: &str = "get_context_issue";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        let Some(issue_id) = self.session.context().get().await.map_err(|e| failed(OP, e))? else {
            return Ok(None);
        };
        tracker
            .issue(&issue_id)
            .await
            .map(Some)
            .map_err(|e| failed(OP, e))
    }

    /// Comment on the context issue.
    ///
    /// Returns the remote's success flag verbatim. An empty body or unset
    /// context fails before any remote call is made.
    pub async fn add_comment(&self, body: &str) -> TrackerResult<bool> {
        const OP: &str = "add_comment";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        require_non_empty(OP, "comment body", body)?;
        let issue_id = self
            .session
            .context()
            .require()
            .await
            .map_err(|e| failed(OP, e))?;

        let payload = tracker
            .create_comment(&issue_id, body)
            .await
            .map_err(|e| failed(OP, e))?;

        if payload.success {
            tracing::info!(issue_id = %issue_id, comment_id = ?payload.comment_id, "comment added");
        } else {
            tracing::warn!(issue_id = %issue_id, "comment creation not accepted by remote");
        }
        Ok(payload.success)
    }

    /// Move the context issue to workflow state `state_id`.
    ///
    /// Returns the remote's success flag verbatim.
    pub async fn set_issue_status(&self, state_id: &str) -> TrackerResult<bool> {
        const OP: &str = "set_issue_status";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        require_non_empty(OP, "state id", state_id)?;
        let issue_id = self
            .session
            .context()
            .require()
            .await
            .map_err(|e| failed(OP, e))?;

        let payload = tracker
            .update_issue(&issue_id, &IssueUpdate::state(state_id))
            .await
            .map_err(|e| failed(OP, e))?;

        if payload.success {
            tracing::info!(issue_id = %issue_id, state_id, "issue status updated");
        } else {
            tracing::warn!(issue_id = %issue_id, state_id, "status update not accepted by remote");
        }
        Ok(payload.success)
    }

    /// Create an issue.
    ///
    /// A payload the remote marks unsuccessful is an [`TrackerError::Api`]
    /// failure. The created issue is not made the context issue.
    pub async fn create_issue(&self, input: &IssueCreate) -> TrackerResult<IssuePayload> {
        const OP: &str = "create_issue";
        let tracker = self.session.tracker().await.map_err(|e| failed(OP, e))?;
        require_non_empty(OP, "title", &input.title)?;
        require_non_empty(OP, "team id", &input.team_id)?;

        let payload = tracker
            .create_issue(input)
            .await
            .map_err(|e| failed(OP, e))?;

        if !payload.success {
            return Err(failed(
                OP,
                TrackerError::Api("issue creation was not accepted".to_string()),
            ));
        }

        if let Some(issue) = &payload.issue {
            tracing::info!(identifier = %issue.identifier, "issue created");
        }
        Ok(payload)
    }

    /// Find a workflow state by id or by name.
    ///
    /// An exact id match wins. Otherwise names are matched
    /// case-insensitively, restricted to `team_id` when given.
    pub async fn resolve_workflow_state(
        &self,
        team_id: Option<&str>,
        name_or_id: &str,
    ) -> TrackerResult<WorkflowState> {
        const OP: &str = "resolve_workflow_state";
        require_non_empty(OP, "state", name_or_id)?;
        let needle = name_or_id.trim();
        let states = self.list_workflow_states().await?;

        if let Some(state) = states.iter().find(|s| s.id == needle) {
            return Ok(state.clone());
        }

        states
            .into_iter()
            .filter(|s| team_id.is_none_or(|t| s.belongs_to(t)))
            .find(|s| s.name.eq_ignore_ascii_case(needle))
            .ok_or_else(|| failed(OP, TrackerError::NotFound(format!("workflow state {needle}"))))
    }

    /// The first `started` workflow state of a team, by position.
    pub async fn start_state_for_team(&self, team_id: &str) -> TrackerResult<WorkflowState> {
        const OP: &str = "start_state_for_team";
        self.list_workflow_states()
            .await?
            .into_iter()
            .filter(|s| s.belongs_to(team_id) && s.state_type == STARTED_STATE_TYPE)
            .min_by(|a, b| a.position.total_cmp(&b.position))
            .ok_or_else(|| {
                failed(
                    OP,
                    TrackerError::NotFound(format!("started workflow state for team {team_id}")),
                )
            })
    }

    /// Move the context issue into its team's first `started` state.
    ///
    /// Returns the chosen state and the remote's success flag.
    pub async fn start_context_issue(&self) -> TrackerResult<(WorkflowState, bool)> {
        const OP: &str = "start_context_issue";
        let issue = self
            .get_context_issue()
            .await?
            .ok_or_else(|| failed(OP, TrackerError::NoContextIssue))?;
        let team_id = issue.team_id().ok_or_else(|| {
            failed(
                OP,
                TrackerError::Api(format!("issue {} has no team", issue.identifier)),
            )
        })?;

        let state = self.start_state_for_team(team_id).await?;
        let accepted = self.set_issue_status(&state.id).await?;
        Ok((state, accepted))
    }
}
