//! Linear GraphQL client.
//!
//! Wraps the Linear GraphQL API, providing one typed method per remote
//! operation consumed by the issue service. Every method performs exactly
//! one POST; there is no retry, rate limiting, or pagination.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::domain::errors::{TrackerError, TrackerResult};
use crate::domain::models::{
    CommentPayload, Issue, IssueCreate, IssuePayload, IssueUpdate, PriorityValue, Team, User,
    WorkflowState,
};
use crate::domain::ports::{IssueTracker, TrackerConnector};
use crate::infrastructure::logging::secret_scrubbing::scrub;

use super::models::{
    CommentCreateData, GraphQlRequest, GraphQlResponse, IssueCreateData, IssueData,
    IssueUpdateData, PriorityValuesData, TeamMembersData, ViewerData, ViewerIssuesData,
    ViewerTeamsData, WorkflowStatesData,
};
use super::queries;

/// Default Linear GraphQL endpoint.
pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

/// HTTP client for the Linear GraphQL API.
///
/// All methods return [`TrackerResult`]. Network failures and non-2xx
/// responses without a GraphQL error body map to
/// [`TrackerError::Transport`]; GraphQL errors map to
/// [`TrackerError::NotFound`] or [`TrackerError::Api`].
#[derive(Clone)]
pub struct LinearClient {
    /// The underlying HTTP client.
    http: Client,
    /// Linear personal API key, sent verbatim in `Authorization`.
    api_key: String,
    /// GraphQL endpoint.
    api_url: String,
}

impl fmt::Debug for LinearClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl LinearClient {
    /// Create a new client against the public Linear endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, LINEAR_API_URL)
    }

    /// Create a client against a custom endpoint (mock servers, proxies).
    pub fn with_base_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self::with_http(Client::new(), api_key, api_url)
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_http(http: Client, api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send one GraphQL operation and decode its `data` member.
    async fn execute<V, T>(&self, operation: &str, query: &str, variables: V) -> TrackerResult<T>
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(operation, "sending Linear request");

        let body = GraphQlRequest { query, variables };
        let resp = self
            .http
            .post(&self.api_url)
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                TrackerError::Transport(format!(
                    "Linear {operation} request failed: {}",
                    scrub(&e.to_string())
                ))
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            TrackerError::Transport(format!("Linear {operation} response read failed: {e}"))
        })?;

        let parsed = serde_json::from_str::<GraphQlResponse<serde_json::Value>>(&text);

        if let Ok(ref envelope) = parsed {
            if let Some(err) = envelope.errors.first() {
                let message = scrub(err.display_message());
                if err.is_not_found() {
                    return Err(TrackerError::NotFound(message));
                }
                return Err(TrackerError::Api(format!(
                    "Linear {operation} failed ({status}): {message}"
                )));
            }
        }

        if !status.is_success() {
            return Err(TrackerError::Transport(format!(
                "Linear {operation} returned {status}: {}",
                scrub(&text)
            )));
        }

        let envelope = parsed.map_err(|e| {
            TrackerError::Api(format!("Linear {operation} parse failed: {e}"))
        })?;
        let data = envelope
            .data
            .ok_or_else(|| TrackerError::Api(format!("Linear {operation} returned no data")))?;

        serde_json::from_value(data).map_err(|e| {
            TrackerError::Api(format!("Linear {operation} decode failed: {e}"))
        })
    }
}

#[async_trait]
impl IssueTracker for LinearClient {
    async fn viewer(&self) -> TrackerResult<User> {
        let data: ViewerData = self.execute("viewer", queries::VIEWER, json!({})).await?;
        Ok(data.viewer)
    }

    async fn viewer_assigned_issues(&self) -> TrackerResult<Vec<Issue>> {
        let data: ViewerIssuesData = self
            .execute(
                "viewer_assigned_issues",
                queries::VIEWER_ASSIGNED_ISSUES,
                json!({}),
            )
            .await?;
        Ok(data.viewer.assigned_issues.nodes)
    }

    async fn issue(&self, id_or_identifier: &str) -> TrackerResult<Issue> {
        let not_found = || TrackerError::NotFound(format!("issue {id_or_identifier}"));

        let data: IssueData = self
            .execute("issue", queries::ISSUE, json!({ "id": id_or_identifier }))
            .await
            .map_err(|e| match e {
                TrackerError::NotFound(_) => not_found(),
                other => other,
            })?;
        data.issue.ok_or_else(not_found)
    }

    async fn workflow_states(&self) -> TrackerResult<Vec<WorkflowState>> {
        let data: WorkflowStatesData = self
            .execute("workflow_states", queries::WORKFLOW_STATES, json!({}))
            .await?;
        Ok(data.workflow_states.nodes)
    }

    async fn viewer_teams(&self) -> TrackerResult<Vec<Team>> {
        let data: ViewerTeamsData = self
            .execute("viewer_teams", queries::VIEWER_TEAMS, json!({}))
            .await?;
        Ok(data.viewer.teams.nodes)
    }

    async fn team_members(&self, team_id: &str) -> TrackerResult<Vec<User>> {
        let data: TeamMembersData = self
            .execute("team_members", queries::TEAM_MEMBERS, json!({ "id": team_id }))
            .await?;
        data.team
            .map(|t| t.members.nodes)
            .ok_or_else(|| TrackerError::NotFound(format!("team {team_id}")))
    }

    async fn priority_values(&self) -> TrackerResult<Vec<PriorityValue>> {
        let data: PriorityValuesData = self
            .execute("priority_values", queries::PRIORITY_VALUES, json!({}))
            .await?;
        Ok(data.issue_priority_values)
    }

    async fn create_comment(&self, issue_id: &str, body: &str) -> TrackerResult<CommentPayload> {
        let data: CommentCreateData = self
            .execute(
                "create_comment",
                queries::COMMENT_CREATE,
                json!({ "input": { "issueId": issue_id, "body": body } }),
            )
            .await?;
        Ok(CommentPayload {
            success: data.comment_create.success,
            comment_id: data.comment_create.comment.map(|c| c.id),
        })
    }

    async fn update_issue(
        &self,
        issue_id: &str,
        update: &IssueUpdate,
    ) -> TrackerResult<IssuePayload> {
        let data: IssueUpdateData = self
            .execute(
                "update_issue",
                queries::ISSUE_UPDATE,
                json!({ "id": issue_id, "input": update }),
            )
            .await?;
        Ok(data.issue_update)
    }

    async fn create_issue(&self, input: &IssueCreate) -> TrackerResult<IssuePayload> {
        let data: IssueCreateData = self
            .execute("create_issue", queries::ISSUE_CREATE, json!({ "input": input }))
            .await?;
        Ok(data.issue_create)
    }
}

/// Builds [`LinearClient`]s bound to a given API key, sharing one
/// connection pool across rebuilds.
#[derive(Debug, Clone)]
pub struct LinearConnector {
    http: Client,
    api_url: String,
}

impl LinearConnector {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
        }
    }
}

impl Default for LinearConnector {
    fn default() -> Self {
        Self::new(LINEAR_API_URL)
    }
}

impl TrackerConnector for LinearConnector {
    fn connect(&self, api_key: &str) -> Arc<dyn IssueTracker> {
        tracing::debug!(api_url = %self.api_url, "building Linear client");
        Arc::new(LinearClient::with_http(
            self.http.clone(),
            api_key,
            self.api_url.clone(),
        ))
    }
}
