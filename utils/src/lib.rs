//! Shared utilities for the tally workspace.

pub mod logging;

pub use logging::{init_tracing, LogFormat};
