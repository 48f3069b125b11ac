//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or compact terminal output on stderr
//! - Rolling JSON log files
//! - Secret scrubbing for API keys in messages

pub mod logger;
pub mod secret_scrubbing;

pub use logger::LoggerImpl;
pub use secret_scrubbing::{scrub, SecretScrubber};
