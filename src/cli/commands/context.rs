//! Context issue commands.

use anyhow::Result;
use serde::Serialize;

use crate::cli::commands::issue::{IssueActionOutput, IssueOutput};
use crate::cli::display::{output, CommandOutput};
use crate::cli::types::ContextCommands;
use crate::domain::errors::TrackerError;
use crate::domain::models::Issue;
use crate::services::IssueService;

/// The context issue with everything needed to copy its id or branch name
/// or open it in a browser.
#[derive(Debug, Serialize)]
pub struct ContextDetailOutput {
    pub issue: IssueOutput,
    pub team: Option<String>,
    pub description: Option<String>,
}

impl From<&Issue> for ContextDetailOutput {
    fn from(issue: &Issue) -> Self {
        Self {
            issue: IssueOutput::from(issue),
            team: issue.team.as_ref().map(|t| t.key.clone()),
            description: issue.description.clone(),
        }
    }
}

impl CommandOutput for ContextDetailOutput {
    fn to_human(&self) -> String {
        let issue = &self.issue;
        let mut lines = vec![
            format!("Context issue: {} {}", issue.identifier, issue.title),
            format!("ID: {}", issue.id),
            format!("Branch: {}", issue.branch_name),
            format!("URL: {}", issue.url),
        ];
        if let Some(state) = &issue.state {
            lines.push(format!("Status: {state}"));
        }
        if let Some(team) = &self.team {
            lines.push(format!("Team: {team}"));
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(String::new());
            lines.push(description.to_string());
        }
        lines.join("\n")
    }
}

pub async fn execute(command: ContextCommands, service: &IssueService, json_mode: bool) -> Result<()> {
    match command {
        ContextCommands::Set { identifier } => {
            let issue = service.select_issue_by_identifier(&identifier).await?;
            let out = IssueActionOutput {
                success: true,
                message: format!("Linear context issue is set to {}", issue.identifier),
                issue: Some(IssueOutput::from(&issue)),
            };
            output(&out, json_mode);
        }

        ContextCommands::Show => {
            let issue = service
                .get_context_issue()
                .await?
                .ok_or(TrackerError::NoContextIssue)?;
            output(&ContextDetailOutput::from(&issue), json_mode);
        }

        ContextCommands::Status { state } => {
            let issue = service
                .get_context_issue()
                .await?
                .ok_or(TrackerError::NoContextIssue)?;
            let state = service
                .resolve_workflow_state(issue.team_id(), &state)
                .await?;

            if !service.set_issue_status(&state.id).await? {
                return Err(TrackerError::Api(format!(
                    "Linear did not accept moving {} to {}",
                    issue.identifier, state.name
                ))
                .into());
            }

            let out = IssueActionOutput {
                success: true,
                message: format!(
                    "Linear context issue {} status is set to {}",
                    issue.identifier, state.name
                ),
                issue: None,
            };
            output(&out, json_mode);
        }

        ContextCommands::Comment { body } => {
            if !service.add_comment(&body).await? {
                return Err(TrackerError::Api(
                    "Linear did not accept the comment".to_string(),
                )
                .into());
            }
            let out = IssueActionOutput {
                success: true,
                message: "Context issue comment added".to_string(),
                issue: None,
            };
            output(&out, json_mode);
        }
    }

    Ok(())
}
