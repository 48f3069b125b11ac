//! Linear GraphQL request and response envelopes.
//!
//! Entity shapes (issues, teams, states) deserialize straight into the
//! domain models; these structs only describe the GraphQL wrappers around
//! them and are not part of the public domain model.

use serde::{Deserialize, Serialize};

use crate::domain::models::{Issue, IssuePayload, PriorityValue, Team, User, WorkflowState};

/// Body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// Top-level GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<GraphQlErrorExtensions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlErrorExtensions {
    /// Linear's error class, e.g. `"invalid input"` or `"authentication error"`.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub user_presentable_message: Option<String>,
}

impl GraphQlError {
    /// Whether the remote reports that the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        let ext = self.extensions.as_ref();
        let in_message = |m: &str| m.to_ascii_lowercase().contains("not found");
        in_message(&self.message)
            || ext
                .and_then(|e| e.user_presentable_message.as_deref())
                .is_some_and(in_message)
            || ext
                .and_then(|e| e.error_type.as_deref())
                .is_some_and(in_message)
            || ext
                .and_then(|e| e.code.as_deref())
                .is_some_and(|c| c.eq_ignore_ascii_case("ENTITY_NOT_FOUND"))
    }

    /// Message suitable for display: the user-presentable one when present.
    pub fn display_message(&self) -> &str {
        self.extensions
            .as_ref()
            .and_then(|e| e.user_presentable_message.as_deref())
            .unwrap_or(&self.message)
    }
}

/// Relay-style connection; only the first page is ever read.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ViewerData {
    pub viewer: User,
}

#[derive(Debug, Deserialize)]
pub struct ViewerIssuesData {
    pub viewer: ViewerIssues,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerIssues {
    pub assigned_issues: Connection<Issue>,
}

#[derive(Debug, Deserialize)]
pub struct IssueData {
    pub issue: Option<Issue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatesData {
    pub workflow_states: Connection<WorkflowState>,
}

#[derive(Debug, Deserialize)]
pub struct ViewerTeamsData {
    pub viewer: ViewerTeams,
}

#[derive(Debug, Deserialize)]
pub struct ViewerTeams {
    pub teams: Connection<Team>,
}

#[derive(Debug, Deserialize)]
pub struct TeamMembersData {
    pub team: Option<TeamMembers>,
}

#[derive(Debug, Deserialize)]
pub struct TeamMembers {
    pub members: Connection<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityValuesData {
    pub issue_priority_values: Vec<PriorityValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateData {
    pub comment_create: CommentCreateResult,
}

#[derive(Debug, Deserialize)]
pub struct CommentCreateResult {
    pub success: bool,
    #[serde(default)]
    pub comment: Option<NodeId>,
}

#[derive(Debug, Deserialize)]
pub struct NodeId {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateData {
    pub issue_update: IssuePayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateData {
    pub issue_create: IssuePayload,
}
