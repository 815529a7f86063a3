//! In-memory voting sessions.
//!
//! A [`VotingSystem`] owns an ordered list of [`Voting`] sessions, each a
//! question with a fixed set of choices. Every voter gets exactly one vote
//! call per session; that call may select several choices.
//!
//! Votes are dispatched either to a session by index with caller-supplied
//! choice labels, or to a random session that then picks a random choice.
//! Randomness and the current date come from injectable [`RandomSource`] and
//! [`Clock`] implementations.

pub mod clock;
pub mod error;
pub mod random;
pub mod report;
pub mod system;
pub mod voting;

pub use clock::{Clock, SystemClock};
pub use error::VotingError;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use report::{
    ChoiceTally, ChoiceVoters, ResultsReport, VoteReceipt, VotersReport, VotingSummary,
};
pub use system::VotingSystem;
pub use voting::Voting;
