//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that adapters must implement:
//! - IssueTracker: remote issue-tracker operations
//! - TrackerConnector: builds an IssueTracker bound to a credential
//! - SecretStore / StateStore: host-owned key-value storage
//!
//! Services depend on these traits, never on concrete adapters.

pub mod issue_tracker;
pub mod stores;

pub use issue_tracker::{IssueTracker, TrackerConnector};
pub use stores::{SecretStore, StateStore};
