//! Shared utilities for the optio workspace
//!
//! The library crates only emit `tracing` events. This crate installs a
//! subscriber for them, configured from the environment.

pub mod tracing;

pub use tracing::*;
