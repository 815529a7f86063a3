//! Nullable infrastructure for deterministic testing.
//!
//! The voting core reads the date and its randomness through the `Clock` and
//! `RandomSource` traits. This crate provides test-friendly implementations
//! that return scripted values and can be steered programmatically.
//!
//! Usage: pass these to `VotingSystem::with_sources` in tests.

pub mod clock;
pub mod random;

pub use clock::NullClock;
pub use random::NullRandom;
