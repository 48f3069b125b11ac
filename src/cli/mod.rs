//! Command-line driver.
//!
//! Stands in for an editor's command palette: every subcommand maps to
//! one issue-service operation and renders its result as text or JSON.

pub mod commands;
pub mod display;
pub mod resolve;
pub mod types;

use std::sync::Arc;

use anyhow::Result;
use serde_json::json;

use crate::adapters::plugins::linear::LinearConnector;
use crate::adapters::stores::JsonFileStore;
use crate::domain::errors::TrackerError;
use crate::domain::models::Config;
use crate::services::{IssueService, Session};

pub use types::{Cli, Commands, ConnectArgs, ContextCommands, CreateArgs, IssuesArgs};

/// Build a session over the configured file stores and load any stored key.
pub async fn build_service(config: &Config) -> IssueService {
    let secrets = Arc::new(JsonFileStore::secrets(config.store.secrets_path()));
    let state = Arc::new(JsonFileStore::state(config.store.state_path()));
    let connector = Arc::new(LinearConnector::new(config.linear.api_url.clone()));

    let session = Arc::new(Session::new(secrets, state, connector));
    if !session.initialize().await {
        tracing::info!("Please run `linear-context connect` to initialize the connection");
    }
    IssueService::new(session)
}

/// Run a parsed command line against the given configuration.
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    let service = build_service(config).await;
    commands::dispatch(cli.command, &service, cli.json).await
}

/// User-facing message for an error, with a hint for fixable preconditions.
pub fn error_message(err: &anyhow::Error) -> (String, &'static str) {
    match err.downcast_ref::<TrackerError>() {
        Some(TrackerError::NotInitialized) => (
            "Not connected to Linear. Run `linear-context connect` first.".to_string(),
            "not_initialized",
        ),
        Some(TrackerError::NoContextIssue) => (
            "No context issue is set. Use `linear-context context set <IDENTIFIER>` \
             or `linear-context issues --select <IDENTIFIER>`."
                .to_string(),
            "no_context_issue",
        ),
        Some(TrackerError::NotFound(what)) => (format!("Linear {what} was not found"), "not_found"),
        Some(other) => (other.to_string(), other.kind()),
        None => (format!("{err:#}"), "error"),
    }
}

/// Print an error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let (message, kind) = error_message(&err);
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "error": message, "kind": kind }))
                .unwrap_or_default()
        );
    } else {
        eprintln!("{}", display::action_failure(&message));
    }
    std::process::exit(1);
}
