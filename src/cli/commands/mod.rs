//! CLI command implementations.

pub mod connect;
pub mod context;
pub mod issue;
pub mod reference;

use anyhow::Result;

use crate::cli::types::Commands;
use crate::services::IssueService;

/// Dispatch a parsed command against an issue service.
pub async fn dispatch(command: Commands, service: &IssueService, json_mode: bool) -> Result<()> {
    match command {
        Commands::Connect(args) => connect::connect(args, service, json_mode).await,
        Commands::Whoami => connect::whoami(service, json_mode).await,
        Commands::Issues(args) => issue::list(args, service, json_mode).await,
        Commands::Context(command) => context::execute(command, service, json_mode).await,
        Commands::Create(args) => issue::create(args, service, json_mode).await,
        Commands::Teams => reference::teams(service, json_mode).await,
        Commands::States { team } => reference::states(team, service, json_mode).await,
        Commands::Members { team } => reference::members(&team, service, json_mode).await,
        Commands::Priorities => reference::priorities(service, json_mode).await,
    }
}
