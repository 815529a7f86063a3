//! Fundamental types for the tally voting manager.
//!
//! Voters and the votes they cast are plain immutable values. Every other
//! crate in the workspace builds on these.

pub mod person;
pub mod vote;

pub use person::{Person, VoterId};
pub use vote::Vote;
