//! linear-context - Linear issue tracker client with a persisted context issue
//!
//! Authenticate against Linear, browse and select issues, and change the
//! status of, comment on, or create issues. One issue per workspace can be
//! marked as the "context issue" that later commands act on.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, error taxonomy, and port traits
//! - **Adapters** (`adapters`): the Linear GraphQL client and store implementations
//! - **Service Layer** (`services`): session, context pointer, and issue operations
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line driver
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use linear_context::adapters::plugins::linear::LinearConnector;
//! use linear_context::adapters::stores::MemoryStore;
//! use linear_context::services::{IssueService, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let session = Arc::new(Session::new(
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(LinearConnector::default()),
//!     ));
//!     session.store_api_key("lin_api_...").await?;
//!     let service = IssueService::new(session);
//!     let issue = service.select_issue_by_identifier("ENG-123").await?;
//!     service.add_comment(&format!("Picked up {}", issue.identifier)).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, Issue, IssueCreate, IssuePayload, IssueUpdate, PriorityValue, Team, User,
    WorkflowState,
};
pub use domain::ports::{IssueTracker, SecretStore, StateStore, TrackerConnector};
pub use domain::{TrackerError, TrackerResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ContextPointer, IssueService, Session};
