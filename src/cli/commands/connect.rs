//! Credential commands.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, BufRead, Write};

use crate::cli::display::{action_success, output, CommandOutput};
use crate::cli::types::ConnectArgs;
use crate::domain::errors::TrackerError;
use crate::domain::models::User;
use crate::services::IssueService;

#[derive(Debug, Serialize)]
pub struct ConnectOutput {
    pub success: bool,
    pub message: String,
    pub user: Option<User>,
}

impl CommandOutput for ConnectOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![action_success(&self.message)];
        if let Some(user) = &self.user {
            lines.push(format!("  Authenticated as {}", describe_user(user)));
        }
        lines.join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct WhoamiOutput {
    pub user: User,
}

impl CommandOutput for WhoamiOutput {
    fn to_human(&self) -> String {
        describe_user(&self.user)
    }
}

fn describe_user(user: &User) -> String {
    match &user.email {
        Some(email) => format!("{} <{}>", user.name, email),
        None => user.name.clone(),
    }
}

fn prompt_api_key() -> Result<String> {
    eprint!("Linear API key: ");
    io::stderr().flush().ok();
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read API key from stdin")?;
    Ok(line.trim().to_string())
}

/// Store an API key and rebuild the client with it.
pub async fn connect(args: ConnectArgs, service: &IssueService, json_mode: bool) -> Result<()> {
    let api_key = match args.api_key {
        Some(key) => key,
        None => prompt_api_key()?,
    };
    if api_key.trim().is_empty() {
        return Err(TrackerError::InvalidInput("no API key provided".to_string()).into());
    }

    service.session().store_api_key(api_key.trim()).await?;

    let user = if args.verify {
        Some(service.whoami().await?)
    } else {
        None
    };

    let out = ConnectOutput {
        success: true,
        message: "Your Linear client connection is all set!".to_string(),
        user,
    };
    output(&out, json_mode);
    Ok(())
}

pub async fn whoami(service: &IssueService, json_mode: bool) -> Result<()> {
    let user = service.whoami().await?;
    output(&WhoamiOutput { user }, json_mode);
    Ok(())
}
