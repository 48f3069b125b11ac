//! Linear native adapter.
//!
//! Provides the GraphQL client backing the issue service: issue queries,
//! reference data (teams, states, priorities, members), and the comment,
//! status-update and issue-creation mutations.

pub mod client;
pub mod models;
pub mod queries;

pub use client::{LinearClient, LinearConnector, LINEAR_API_URL};
