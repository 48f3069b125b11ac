//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linear-context")]
#[command(about = "Work with Linear issues and a per-workspace context issue", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .linear-context/config.yaml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a Linear API key for this workspace
    Connect(ConnectArgs),

    /// Show the authenticated Linear user
    Whoami,

    /// List issues assigned to you
    Issues(IssuesArgs),

    /// Context issue commands
    #[command(subcommand)]
    Context(ContextCommands),

    /// Create a new issue
    Create(CreateArgs),

    /// List the teams you belong to
    Teams,

    /// List workflow states
    States {
        /// Only show states of this team (key or id)
        #[arg(short, long)]
        team: Option<String>,
    },

    /// List members of a team
    Members {
        /// Team key or id
        team: String,
    },

    /// List issue priority values
    Priorities,
}

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Linear personal API key (read from stdin when omitted)
    #[arg(env = "LINEAR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Check the key against Linear after storing it
    #[arg(long)]
    pub verify: bool,
}

#[derive(Args, Debug)]
pub struct IssuesArgs {
    /// Set one of the listed issues as the context issue
    #[arg(short, long, value_name = "IDENTIFIER")]
    pub select: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ContextCommands {
    /// Resolve an issue identifier and make it the context issue
    Set {
        /// Issue identifier, e.g. ENG-123
        identifier: String,
    },

    /// Show the context issue with its id, branch name and URL
    Show,

    /// Move the context issue to a workflow state
    Status {
        /// Workflow state name or id
        state: String,
    },

    /// Comment on the context issue
    Comment {
        /// Comment body (markdown)
        body: String,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Issue title
    #[arg(short, long)]
    pub title: String,

    /// Team key or id
    #[arg(long)]
    pub team: String,

    /// Issue description (markdown)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Assignee: user id, name, display name, email, or "me"
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Initial workflow state name or id
    #[arg(short, long)]
    pub state: Option<String>,

    /// Estimate points
    #[arg(short, long)]
    pub estimate: Option<i32>,

    /// Priority number or label (e.g. 2 or "High")
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Make the created issue the context issue
    #[arg(long)]
    pub select: bool,

    /// Make the created issue the context issue and move it to the team's first started state
    #[arg(long)]
    pub start: bool,
}
