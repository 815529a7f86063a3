//! The session registry and vote dispatcher.

use crate::clock::{Clock, SystemClock};
use crate::error::VotingError;
use crate::random::{RandomSource, ThreadRandom};
use crate::report::{ResultsReport, VoteReceipt, VotersReport, VotingSummary};
use crate::voting::Voting;
use tally_types::Person;
use tracing::{debug, info, warn};

/// Ordered collection of voting sessions, addressed by creation index.
pub struct VotingSystem {
    votings: Vec<Voting>,
    clock: Box<dyn Clock>,
    random: Box<dyn RandomSource>,
}

impl VotingSystem {
    /// A system stamping votes with the local date and using the thread RNG.
    pub fn new() -> Self {
        Self::with_sources(Box::new(SystemClock), Box::new(ThreadRandom))
    }

    pub fn with_sources(clock: Box<dyn Clock>, random: Box<dyn RandomSource>) -> Self {
        Self {
            votings: Vec::new(),
            clock,
            random,
        }
    }

    pub fn len(&self) -> usize {
        self.votings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votings.is_empty()
    }

    /// Register a new session and return its index.
    ///
    /// A label repeated within `choices` is registered once.
    pub fn create_voting<I, S>(
        &mut self,
        question: impl Into<String>,
        anonymous: bool,
        kind: u32,
        choices: I,
    ) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut voting = Voting::new(kind, question, anonymous);
        for label in choices {
            if let Err(e) = voting.create_choice(label) {
                debug!("skipping choice: {e}");
            }
        }
        let index = self.votings.len();
        info!(
            index,
            question = %voting.question(),
            anonymous,
            choices = voting.choices().len(),
            "voting created"
        );
        self.votings.push(voting);
        index
    }

    /// Add a choice to an existing session.
    pub fn add_choice(
        &mut self,
        index: usize,
        label: impl Into<String>,
    ) -> Result<(), VotingError> {
        self.voting_mut(index)?.create_choice(label)
    }

    /// Cast `voter`'s vote in session `index` for the given labels.
    pub fn vote<I, S>(
        &mut self,
        index: usize,
        voter: &Person,
        choices: I,
    ) -> Result<VoteReceipt, VotingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let today = self.clock.today();
        self.voting_mut(index)?.vote(voter, choices, today)
    }

    /// Cast `voter`'s vote for a random choice in a random session.
    pub fn vote_random(&mut self, voter: &Person) -> Result<VoteReceipt, VotingError> {
        if self.votings.is_empty() {
            warn!(voter = %voter, "cannot pick a random voting: no votings registered");
            return Err(VotingError::NoSessions);
        }
        let index = self.random.pick(self.votings.len());
        debug!(index, source = self.random.name(), "picked random voting");
        let today = self.clock.today();
        let len = self.votings.len();
        let voting = self
            .votings
            .get_mut(index)
            .ok_or(VotingError::IndexOutOfRange { index, len })?;
        voting.vote_random(voter, self.random.as_ref(), today)
    }

    pub fn results(&self, index: usize) -> Result<ResultsReport, VotingError> {
        Ok(self.voting(index)?.results())
    }

    pub fn voters_report(&self, index: usize) -> Result<VotersReport, VotingError> {
        Ok(self.voting(index)?.voters_report())
    }

    pub fn summary(&self, index: usize) -> Result<VotingSummary, VotingError> {
        Ok(self.voting(index)?.summary())
    }

    pub fn print_results(&self, index: usize) -> Result<ResultsReport, VotingError> {
        Ok(self.checked(index)?.print_results())
    }

    pub fn print_voters(&self, index: usize) -> Result<VotersReport, VotingError> {
        Ok(self.checked(index)?.print_voters())
    }

    pub fn print_voting(&self, index: usize) -> Result<VotingSummary, VotingError> {
        Ok(self.checked(index)?.print_voting())
    }

    /// The session at `index`.
    pub fn voting(&self, index: usize) -> Result<&Voting, VotingError> {
        self.votings.get(index).ok_or(VotingError::IndexOutOfRange {
            index,
            len: self.votings.len(),
        })
    }

    /// Read-only view of every session in creation order.
    pub fn votings(&self) -> &[Voting] {
        &self.votings
    }

    fn checked(&self, index: usize) -> Result<&Voting, VotingError> {
        self.voting(index).inspect_err(|_| warn!(index, "out of index"))
    }

    fn voting_mut(&mut self, index: usize) -> Result<&mut Voting, VotingError> {
        let len = self.votings.len();
        match self.votings.get_mut(index) {
            Some(voting) => Ok(voting),
            None => {
                warn!(index, len, "index is out of range");
                Err(VotingError::IndexOutOfRange { index, len })
            }
        }
    }
}

impl Default for VotingSystem {
    fn default() -> Self {
        Self::new()
    }
}
