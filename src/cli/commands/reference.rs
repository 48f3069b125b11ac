//! Reference data commands: teams, workflow states, members, priorities.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::{list_table, output, render_list, CommandOutput};
use crate::cli::resolve::resolve_team;
use crate::domain::models::{PriorityValue, Team, User, WorkflowState};
use crate::services::IssueService;

#[derive(Debug, Serialize)]
pub struct TeamListOutput {
    pub teams: Vec<Team>,
    pub total: usize,
}

impl CommandOutput for TeamListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["key", "name", "id"]);
        for team in &self.teams {
            table.add_row(vec![team.key.as_str(), team.name.as_str(), team.id.as_str()]);
        }
        render_list("team", &table, self.total)
    }
}

#[derive(Debug, Serialize)]
pub struct StateListOutput {
    pub states: Vec<WorkflowState>,
    pub total: usize,
}

impl CommandOutput for StateListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["team", "name", "type", "id"]);
        for state in &self.states {
            table.add_row(vec![
                state.team.as_ref().map(|t| t.key.clone()).unwrap_or_default(),
                state.name.clone(),
                state.state_type.clone(),
                state.id.clone(),
            ]);
        }
        render_list("workflow state", &table, self.total)
    }
}

#[derive(Debug, Serialize)]
pub struct MemberListOutput {
    pub team: String,
    pub members: Vec<User>,
    pub total: usize,
}

impl CommandOutput for MemberListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["name", "display name", "email", "id"]);
        for user in &self.members {
            table.add_row(vec![
                user.name.clone(),
                user.display_name.clone(),
                user.email.clone().unwrap_or_default(),
                user.id.clone(),
            ]);
        }
        render_list("member", &table, self.total)
    }
}

#[derive(Debug, Serialize)]
pub struct PriorityListOutput {
    pub priorities: Vec<PriorityValue>,
}

impl CommandOutput for PriorityListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["priority", "label"]);
        for value in &self.priorities {
            table.add_row(vec![value.priority.to_string(), value.label.clone()]);
        }
        render_list("priority value", &table, self.priorities.len())
    }
}

pub async fn teams(service: &IssueService, json_mode: bool) -> Result<()> {
    let teams = service.list_my_teams().await?;
    let out = TeamListOutput {
        total: teams.len(),
        teams,
    };
    output(&out, json_mode);
    Ok(())
}

pub async fn states(team: Option<String>, service: &IssueService, json_mode: bool) -> Result<()> {
    let team = match team {
        Some(key) => Some(resolve_team(service, &key).await?),
        None => None,
    };

    let states: Vec<WorkflowState> = service
        .list_workflow_states()
        .await?
        .into_iter()
        .filter(|s| team.as_ref().is_none_or(|t| s.belongs_to(&t.id)))
        .collect();

    let out = StateListOutput {
        total: states.len(),
        states,
    };
    output(&out, json_mode);
    Ok(())
}

pub async fn members(team: &str, service: &IssueService, json_mode: bool) -> Result<()> {
    let team = resolve_team(service, team).await?;
    let members = service.list_team_members(&team).await?;
    let out = MemberListOutput {
        team: team.key,
        total: members.len(),
        members,
    };
    output(&out, json_mode);
    Ok(())
}

pub async fn priorities(service: &IssueService, json_mode: bool) -> Result<()> {
    let priorities = service.list_available_priorities().await?;
    output(&PriorityListOutput { priorities }, json_mode);
    Ok(())
}
