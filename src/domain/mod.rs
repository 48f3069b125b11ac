//! Domain layer
//!
//! This module contains the issue-tracker models, the error taxonomy, and
//! the port traits that adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{StoreError, StoreResult, TrackerError, TrackerResult};
