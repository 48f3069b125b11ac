//! Issue-tracker domain models.
//!
//! These are read-only views of remote Linear entities plus the input
//! shapes for the mutations this crate performs. Nothing here is cached
//! beyond the lifetime of a single operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lightweight reference to a team embedded in other entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: String,
    pub key: String,
}

/// Lightweight reference to the workflow state an issue is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStateRef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub state_type: String,
}

/// A Linear issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Opaque remote key (UUID).
    pub id: String,
    /// Human-readable identifier, e.g. `ENG-123`.
    pub identifier: String,
    pub title: String,
    /// Suggested git branch name.
    pub branch_name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Priority number (0 = none, 1 = urgent ... 4 = low).
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub estimate: Option<f64>,
    #[serde(default)]
    pub state: Option<WorkflowStateRef>,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Team id the issue belongs to, when the remote returned it.
    pub fn team_id(&self) -> Option<&str> {
        self.team.as_ref().map(|t| t.id.as_str())
    }
}

/// A named status value an issue can be moved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    pub id: String,
    pub name: String,
    /// One of `triage`, `backlog`, `unstarted`, `started`, `completed`, `canceled`.
    #[serde(rename = "type")]
    pub state_type: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub position: f64,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

impl WorkflowState {
    pub fn belongs_to(&self, team_id: &str) -> bool {
        self.team.as_ref().is_some_and(|t| t.id == team_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    /// Short key used as the identifier prefix, e.g. `ENG`.
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One entry of the workspace's priority scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityValue {
    pub priority: i32,
    pub label: String,
}

/// Result envelope of a comment-create mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub success: bool,
    #[serde(default)]
    pub comment_id: Option<String>,
}

/// Result envelope of an issue create/update mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuePayload {
    pub success: bool,
    #[serde(default)]
    pub issue: Option<Issue>,
}

/// Fields for creating an issue. Unset optional fields are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreate {
    pub title: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl IssueCreate {
    pub fn new(title: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            team_id: team_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, state_id: impl Into<String>) -> Self {
        self.state_id = Some(state_id.into());
        self
    }

    #[must_use]
    pub const fn with_estimate(mut self, estimate: i32) -> Self {
        self.estimate = Some(estimate);
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Fields for updating an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
}

impl IssueUpdate {
    pub fn state(state_id: impl Into<String>) -> Self {
        Self {
            state_id: Some(state_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_create_omits_unset_fields() {
        let input = IssueCreate::new("Fix login", "team-1").with_priority(2);
        let json = serde_json::to_value(&input).unwrap();

        assert_eq!(json["title"], "Fix login");
        assert_eq!(json["teamId"], "team-1");
        assert_eq!(json["priority"], 2);
        assert!(json.get("description").is_none());
        assert!(json.get("assigneeId").is_none());
        assert!(json.get("stateId").is_none());
        assert!(json.get("estimate").is_none());
    }

    #[test]
    fn test_issue_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "uuid-1",
            "identifier": "ENG-1",
            "title": "Minimal",
            "branchName": "eng-1-minimal",
            "url": "https://linear.app/acme/issue/ENG-1"
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.identifier, "ENG-1");
        assert_eq!(issue.priority, 0);
        assert!(issue.state.is_none());
        assert!(issue.team_id().is_none());
    }

    #[test]
    fn test_workflow_state_team_membership() {
        let state = WorkflowState {
            id: "s1".into(),
            name: "In Progress".into(),
            state_type: "started".into(),
            color: None,
            position: 1.0,
            team: Some(TeamRef {
                id: "team-1".into(),
                key: "ENG".into(),
            }),
        };
        assert!(state.belongs_to("team-1"));
        assert!(!state.belongs_to("team-2"));
    }
}
