//! Domain models.

pub mod config;
pub mod issue;

pub use config::{Config, LinearConfig, LoggingConfig, RotationPolicy, StoreConfig};
pub use issue::{
    CommentPayload, Issue, IssueCreate, IssuePayload, IssueUpdate, PriorityValue, Team, TeamRef,
    User, WorkflowState, WorkflowStateRef,
};
