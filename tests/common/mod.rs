//! Common test utilities for integration tests
//!
//! Provides an in-process fake Linear tracker that records every remote
//! call, a connector that records the keys it was asked to bind, and a
//! harness wiring both into a session over in-memory stores.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use linear_context::adapters::stores::MemoryStore;
use linear_context::domain::models::{
    CommentPayload, Issue, IssueCreate, IssuePayload, IssueUpdate, PriorityValue, Team, TeamRef,
    User, WorkflowState, WorkflowStateRef,
};
use linear_context::domain::ports::{IssueTracker, TrackerConnector};
use linear_context::services::{IssueService, Session, API_KEY_SECRET};
use linear_context::{TrackerError, TrackerResult};

/// A remote call observed by [`FakeTracker`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Viewer,
    AssignedIssues,
    Issue(String),
    WorkflowStates,
    Teams,
    Members(String),
    Priorities,
    CreateComment { issue_id: String, body: String },
    UpdateIssue { issue_id: String, state_id: Option<String> },
    CreateIssue(IssueCreate),
}

/// In-memory stand-in for the Linear API.
pub struct FakeTracker {
    pub viewer: User,
    pub issues: Mutex<Vec<Issue>>,
    pub states: Mutex<Vec<WorkflowState>>,
    pub teams: Mutex<Vec<Team>>,
    pub members: Mutex<HashMap<String, Vec<User>>>,
    pub priorities: Mutex<Vec<PriorityValue>>,
    /// When set, every call fails with a transport error.
    pub transport_down: AtomicBool,
    /// Success flag reported by mutation payloads.
    pub accept_mutations: AtomicBool,
    calls: Mutex<Vec<Call>>,
}

impl Default for FakeTracker {
    fn default() -> Self {
        Self {
            viewer: user("u-me", "Me Myself"),
            issues: Mutex::new(Vec::new()),
            states: Mutex::new(Vec::new()),
            teams: Mutex::new(Vec::new()),
            members: Mutex::new(HashMap::new()),
            priorities: Mutex::new(Vec::new()),
            transport_down: AtomicBool::new(false),
            accept_mutations: AtomicBool::new(true),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeTracker {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn add_issue(&self, issue: Issue) {
        self.issues.lock().unwrap().push(issue);
    }

    pub fn add_state(&self, state: WorkflowState) {
        self.states.lock().unwrap().push(state);
    }

    pub fn add_team(&self, team: Team, members: Vec<User>) {
        self.members.lock().unwrap().insert(team.id.clone(), members);
        self.teams.lock().unwrap().push(team);
    }

    pub fn set_transport_down(&self, down: bool) {
        self.transport_down.store(down, Ordering::SeqCst);
    }

    pub fn set_accept_mutations(&self, accept: bool) {
        self.accept_mutations.store(accept, Ordering::SeqCst);
    }

    fn record(&self, call: Call) -> TrackerResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.transport_down.load(Ordering::SeqCst) {
            return Err(TrackerError::Transport(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }

    fn accepted(&self) -> bool {
        self.accept_mutations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn viewer(&self) -> TrackerResult<User> {
        self.record(Call::Viewer)?;
        Ok(self.viewer.clone())
    }

    async fn viewer_assigned_issues(&self) -> TrackerResult<Vec<Issue>> {
        self.record(Call::AssignedIssues)?;
        Ok(self.issues.lock().unwrap().clone())
    }

    async fn issue(&self, id_or_identifier: &str) -> TrackerResult<Issue> {
        self.record(Call::Issue(id_or_identifier.to_string()))?;
        self.issues
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id_or_identifier || i.identifier == id_or_identifier)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(format!("issue {id_or_identifier}")))
    }

    async fn workflow_states(&self) -> TrackerResult<Vec<WorkflowState>> {
        self.record(Call::WorkflowStates)?;
        Ok(self.states.lock().unwrap().clone())
    }

    async fn viewer_teams(&self) -> TrackerResult<Vec<Team>> {
        self.record(Call::Teams)?;
        Ok(self.teams.lock().unwrap().clone())
    }

    async fn team_members(&self, team_id: &str) -> TrackerResult<Vec<User>> {
        self.record(Call::Members(team_id.to_string()))?;
        self.members
            .lock()
            .unwrap()
            .get(team_id)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(format!("team {team_id}")))
    }

    async fn priority_values(&self) -> TrackerResult<Vec<PriorityValue>> {
        self.record(Call::Priorities)?;
        Ok(self.priorities.lock().unwrap().clone())
    }

    async fn create_comment(&self, issue_id: &str, body: &str) -> TrackerResult<CommentPayload> {
        self.record(Call::CreateComment {
            issue_id: issue_id.to_string(),
            body: body.to_string(),
        })?;
        let success = self.accepted();
        Ok(CommentPayload {
            success,
            comment_id: success.then(|| "comment-1".to_string()),
        })
    }

    async fn update_issue(
        &self,
        issue_id: &str,
        update: &IssueUpdate,
    ) -> TrackerResult<IssuePayload> {
        self.record(Call::UpdateIssue {
            issue_id: issue_id.to_string(),
            state_id: update.state_id.clone(),
        })?;
        Ok(IssuePayload {
            success: self.accepted(),
            issue: None,
        })
    }

    async fn create_issue(&self, input: &IssueCreate) -> TrackerResult<IssuePayload> {
        self.record(Call::CreateIssue(input.clone()))?;
        if !self.accepted() {
            return Ok(IssuePayload {
                success: false,
                issue: None,
            });
        }

        let team_key = self
            .teams
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == input.team_id)
            .map_or_else(|| "NEW".to_string(), |t| t.key.clone());
        let number = self.issues.lock().unwrap().len() + 100;
        let mut created = issue(
            &format!("created-{number}"),
            &format!("{team_key}-{number}"),
            &input.team_id,
        );
        created.title = input.title.clone();
        self.add_issue(created.clone());

        Ok(IssuePayload {
            success: true,
            issue: Some(created),
        })
    }
}

/// Connector that hands out one shared [`FakeTracker`] and records keys.
pub struct FakeConnector {
    pub tracker: Arc<FakeTracker>,
    keys: Mutex<Vec<String>>,
}

impl FakeConnector {
    pub fn new(tracker: Arc<FakeTracker>) -> Self {
        Self {
            tracker,
            keys: Mutex::new(Vec::new()),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }

    pub fn last_key(&self) -> Option<String> {
        self.keys.lock().unwrap().last().cloned()
    }
}

impl TrackerConnector for FakeConnector {
    fn connect(&self, api_key: &str) -> Arc<dyn IssueTracker> {
        self.keys.lock().unwrap().push(api_key.to_string());
        self.tracker.clone()
    }
}

/// A session over in-memory stores and a fake tracker.
pub struct Harness {
    pub secrets: Arc<MemoryStore>,
    pub state: Arc<MemoryStore>,
    pub connector: Arc<FakeConnector>,
    pub tracker: Arc<FakeTracker>,
    pub session: Arc<Session>,
    pub service: IssueService,
}

impl Harness {
    fn build(secrets: MemoryStore) -> Self {
        let secrets = Arc::new(secrets);
        let state = Arc::new(MemoryStore::new());
        let tracker = Arc::new(FakeTracker::default());
        let connector = Arc::new(FakeConnector::new(tracker.clone()));
        let session = Arc::new(Session::new(
            secrets.clone(),
            state.clone(),
            connector.clone(),
        ));
        let service = IssueService::new(session.clone());
        Self {
            secrets,
            state,
            connector,
            tracker,
            session,
            service,
        }
    }

    /// No API key stored; `initialize` has run and returned false.
    pub async fn disconnected() -> Self {
        let harness = Self::build(MemoryStore::new());
        assert!(!harness.session.initialize().await);
        harness
    }

    /// An API key is stored and the session is initialized.
    pub async fn connected() -> Self {
        let harness = Self::build(MemoryStore::with_entry(API_KEY_SECRET, "lin_api_test"));
        assert!(harness.session.initialize().await);
        harness
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        display_name: name.split_whitespace().next().unwrap_or(name).to_lowercase(),
        email: Some(format!("{id}@example.com")),
    }
}

pub fn team(id: &str, key: &str) -> Team {
    Team {
        id: id.to_string(),
        key: key.to_string(),
        name: format!("{key} team"),
    }
}

pub fn issue(id: &str, identifier: &str, team_id: &str) -> Issue {
    Issue {
        id: id.to_string(),
        identifier: identifier.to_string(),
        title: format!("Issue {identifier}"),
        branch_name: format!("{}-branch", identifier.to_lowercase()),
        url: format!("https://linear.app/acme/issue/{identifier}"),
        description: None,
        priority: 0,
        estimate: None,
        state: Some(WorkflowStateRef {
            id: "state-todo".to_string(),
            name: "Todo".to_string(),
            state_type: "unstarted".to_string(),
        }),
        team: Some(TeamRef {
            id: team_id.to_string(),
            key: identifier.split('-').next().unwrap_or_default().to_string(),
        }),
        updated_at: None,
    }
}

pub fn state(id: &str, name: &str, state_type: &str, position: f64, team_id: &str) -> WorkflowState {
    WorkflowState {
        id: id.to_string(),
        name: name.to_string(),
        state_type: state_type.to_string(),
        color: None,
        position,
        team: Some(TeamRef {
            id: team_id.to_string(),
            key: team_id.to_uppercase(),
        }),
    }
}
