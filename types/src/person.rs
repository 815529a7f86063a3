//! Voter identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier of a voter.
///
/// Two people with the same name are still different voters unless they
/// carry the same id. Ids issued by [`VoterId::next`] and ids supplied through
/// [`VoterId::new`] live in separate spaces and never compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VoterId {
    /// Issued by this process.
    Issued(u64),
    /// Supplied by the caller, e.g. from an external voter roll.
    External(u64),
}

impl VoterId {
    pub fn new(raw: u64) -> Self {
        Self::External(raw)
    }

    /// Issue the next process-wide id.
    pub fn next() -> Self {
        static VOTER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        Self::Issued(VOTER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        match self {
            Self::Issued(raw) | Self::External(raw) => *raw,
        }
    }

    pub fn is_issued(&self) -> bool {
        matches!(self, Self::Issued(_))
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issued(raw) => write!(f, "#{raw}"),
            Self::External(raw) => write!(f, "ext:{raw}"),
        }
    }
}

/// A voter, identified by an issued id and named by first and last name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Person {
    id: VoterId,
    first_name: String,
    last_name: String,
}

impl Person {
    /// Create a person with a freshly issued id.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::with_id(VoterId::next(), first_name, last_name)
    }

    /// Create a person with an id issued elsewhere (e.g. an external voter roll).
    pub fn with_id(
        id: VoterId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn id(&self) -> VoterId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Whether `other` is the same voter, regardless of how the name is spelled.
    pub fn is_same_voter(&self, other: &Person) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
