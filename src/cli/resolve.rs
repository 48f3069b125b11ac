//! Resolution of user-typed names to Linear ids.
//!
//! Lets users type `ENG` instead of a team UUID, `High` instead of a
//! priority number, and so on. Every lookup goes through the issue
//! service, so it costs one remote call.

use crate::domain::errors::{TrackerError, TrackerResult};
use crate::domain::models::{PriorityValue, Team, User};
use crate::services::IssueService;

/// Resolve a team by id or key (case-insensitive) among the user's teams.
pub async fn resolve_team(service: &IssueService, key_or_id: &str) -> TrackerResult<Team> {
    let teams = service.list_my_teams().await?;
    find_team(teams, key_or_id)
}

fn find_team(teams: Vec<Team>, key_or_id: &str) -> TrackerResult<Team> {
    let needle = key_or_id.trim();
    teams
        .into_iter()
        .find(|t| t.id == needle || t.key.eq_ignore_ascii_case(needle))
        .ok_or_else(|| TrackerError::NotFound(format!("team {needle}")))
}

/// Resolve an assignee within a team. `me` maps to the authenticated user.
pub async fn resolve_assignee(
    service: &IssueService,
    team: &Team,
    query: &str,
) -> TrackerResult<User> {
    if query.eq_ignore_ascii_case("me") {
        return service.whoami().await;
    }
    let members = service.list_team_members(team).await?;
    find_user(members, query)
        .ok_or_else(|| TrackerError::NotFound(format!("member {query} of team {}", team.key)))
}

fn find_user(users: Vec<User>, query: &str) -> Option<User> {
    let needle = query.trim();
    users.into_iter().find(|u| {
        u.id == needle
            || u.name.eq_ignore_ascii_case(needle)
            || u.display_name.eq_ignore_ascii_case(needle)
            || u.email.as_deref().is_some_and(|e| e.eq_ignore_ascii_case(needle))
    })
}

/// Resolve a priority given as a number or a label.
///
/// Numbers are passed through without a remote call.
pub async fn resolve_priority(service: &IssueService, value: &str) -> TrackerResult<i32> {
    if let Ok(n) = value.trim().parse::<i32>() {
        return Ok(n);
    }
    let values = service.list_available_priorities().await?;
    find_priority(&values, value)
}

fn find_priority(values: &[PriorityValue], label: &str) -> TrackerResult<i32> {
    let needle = label.trim();
    values
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(needle))
        .map(|p| p.priority)
        .ok_or_else(|| TrackerError::InvalidInput(format!("unknown priority {needle:?}")))
}
