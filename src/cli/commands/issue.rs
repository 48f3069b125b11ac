//! Issue listing and creation commands.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::{action_success, list_table, output, render_list, truncate, CommandOutput};
use crate::cli::resolve::{resolve_assignee, resolve_priority, resolve_team};
use crate::cli::types::{CreateArgs, IssuesArgs};
use crate::domain::errors::TrackerError;
use crate::domain::models::{Issue, IssueCreate};
use crate::services::IssueService;

#[derive(Debug, Serialize)]
pub struct IssueOutput {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub state: Option<String>,
    pub priority: i32,
    pub branch_name: String,
    pub url: String,
}

impl From<&Issue> for IssueOutput {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id.clone(),
            identifier: issue.identifier.clone(),
            title: issue.title.clone(),
            state: issue.state.as_ref().map(|s| s.name.clone()),
            priority: issue.priority,
            branch_name: issue.branch_name.clone(),
            url: issue.url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueListOutput {
    pub issues: Vec<IssueOutput>,
    pub total: usize,
    /// Identifier of the issue made the context issue, if any.
    pub selected: Option<String>,
}

impl CommandOutput for IssueListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["identifier", "state", "title"]);
        for issue in &self.issues {
            table.add_row(vec![
                issue.identifier.clone(),
                issue.state.clone().unwrap_or_default(),
                truncate(&issue.title, 60),
            ]);
        }

        let mut rendered = render_list("issue", &table, self.total);
        if let Some(selected) = &self.selected {
            rendered.push('\n');
            rendered.push_str(&action_success(&format!(
                "Linear context issue is set to {selected}"
            )));
        }
        rendered
    }
}

/// Result of a mutation on an issue.
#[derive(Debug, Serialize)]
pub struct IssueActionOutput {
    pub success: bool,
    pub message: String,
    pub issue: Option<IssueOutput>,
}

impl CommandOutput for IssueActionOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![action_success(&self.message)];
        if let Some(issue) = &self.issue {
            lines.push(format!("  {} {}", issue.identifier, issue.title));
            lines.push(format!("  {}", issue.url));
        }
        lines.join("\n")
    }
}

/// List issues assigned to the user, optionally selecting one as context.
pub async fn list(args: IssuesArgs, service: &IssueService, json_mode: bool) -> Result<()> {
    let issues = service.list_my_issues().await?;

    let selected = match args.select {
        Some(identifier) => {
            let needle = identifier.trim();
            let issue = issues
                .iter()
                .find(|i| i.identifier.eq_ignore_ascii_case(needle) || i.id == needle)
                .ok_or_else(|| {
                    TrackerError::NotFound(format!("{needle} among issues assigned to you"))
                })?;
            service.select_issue(issue).await?;
            Some(issue.identifier.clone())
        }
        None => None,
    };

    let out = IssueListOutput {
        total: issues.len(),
        issues: issues.iter().map(IssueOutput::from).collect(),
        selected,
    };
    output(&out, json_mode);
    Ok(())
}

/// Create an issue from command-line fields.
pub async fn create(args: CreateArgs, service: &IssueService, json_mode: bool) -> Result<()> {
    let team = resolve_team(service, &args.team).await?;

    let mut input = IssueCreate::new(args.title, team.id.clone());
    if let Some(description) = args.description {
        input = input.with_description(description);
    }
    if let Some(assignee) = args.assignee {
        let user = resolve_assignee(service, &team, &assignee).await?;
        input = input.with_assignee(user.id);
    }
    if let Some(state) = args.state {
        let state = service.resolve_workflow_state(Some(&team.id), &state).await?;
        input = input.with_state(state.id);
    }
    if let Some(estimate) = args.estimate {
        input = input.with_estimate(estimate);
    }
    if let Some(priority) = args.priority {
        input = input.with_priority(resolve_priority(service, &priority).await?);
    }

    let payload = service.create_issue(&input).await?;
    let issue = payload
        .issue
        .ok_or_else(|| TrackerError::Api("created issue missing from response".to_string()))?;

    let mut message = format!("Issue {} created", issue.identifier);

    if args.select || args.start {
        service.select_issue(&issue).await?;
        message.push_str(" and set as context issue");
    }

    if args.start {
        let (state, accepted) = service.start_context_issue().await?;
        if !accepted {
            return Err(TrackerError::Api(format!(
                "Linear did not accept moving {} to {}",
                issue.identifier, state.name
            ))
            .into());
        }
        message.push_str(&format!(", moved to {}", state.name));
    }

    let out = IssueActionOutput {
        success: true,
        message,
        issue: Some(IssueOutput::from(&issue)),
    };
    output(&out, json_mode);
    Ok(())
}
