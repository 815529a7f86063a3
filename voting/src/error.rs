use tally_types::Person;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VotingError {
    #[error("index {index} is out of range ({len} sessions)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("choice '{0}' does not exist")]
    ChoiceNotFound(String),

    #[error("random pick {index} is outside the {len} available choices")]
    PickOutOfRange { index: usize, len: usize },

    #[error("choice '{0}' already exists")]
    DuplicateChoice(String),

    #[error("{0} has already voted")]
    AlreadyVoted(Person),

    #[error("no voting sessions registered")]
    NoSessions,

    #[error("voting has no choices")]
    NoChoices,
}
