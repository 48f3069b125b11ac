//! Adapters for external systems.

pub mod plugins;
pub mod stores;
