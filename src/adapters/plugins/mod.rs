//! Native adapter plugins.
//!
//! This module contains compiled Rust adapter implementations. Each
//! sub-module corresponds to an external issue tracker and implements the
//! domain port traits directly.

pub mod linear;
