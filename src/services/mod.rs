//! Service layer
//!
//! Business logic coordinating the session, the context pointer, and the
//! remote issue tracker.

pub mod context;
pub mod issue_service;
pub mod session;

pub use context::{ContextPointer, CONTEXT_ISSUE_KEY};
pub use issue_service::IssueService;
pub use session::{Session, API_KEY_SECRET};
