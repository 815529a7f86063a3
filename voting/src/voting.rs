//! A single voting session.

use crate::error::VotingError;
use crate::random::RandomSource;
use crate::report::{
    ChoiceTally, ChoiceVoters, ResultsReport, VoteReceipt, VotersReport, VotingSummary,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use tally_types::{Person, Vote};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Serialize)]
struct Choice {
    label: String,
    votes: BTreeSet<Vote>,
}

/// One question with a fixed set of choices.
///
/// Each voter gets a single vote call. A call may select several choices;
/// unknown labels are skipped but the voter is still recorded.
///
/// Equality ignores the order in which choices were registered.
#[derive(Clone, Debug, Serialize)]
pub struct Voting {
    /// Opaque type tag supplied by the caller.
    kind: u32,
    question: String,
    anonymous: bool,
    /// Choices in creation order.
    choices: Vec<Choice>,
    /// Everyone who has used their vote call, in order.
    voters: Vec<Person>,
}

impl Voting {
    pub fn new(kind: u32, question: impl Into<String>, anonymous: bool) -> Self {
        Self {
            kind,
            question: question.into(),
            anonymous,
            choices: Vec::new(),
            voters: Vec::new(),
        }
    }

    pub fn kind(&self) -> u32 {
        self.kind
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    /// Choice labels in creation order.
    pub fn choices(&self) -> Vec<&str> {
        self.choices.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn voters(&self) -> &[Person] {
        &self.voters
    }

    pub fn has_voted(&self, voter: &Person) -> bool {
        self.voters.iter().any(|v| v.is_same_voter(voter))
    }

    /// Number of votes for `label`, or `None` if no such choice exists.
    pub fn votes_for(&self, label: &str) -> Option<usize> {
        self.choice(label).map(|c| c.votes.len())
    }

    /// Total votes over all choices.
    pub fn total_votes(&self) -> usize {
        self.choices.iter().map(|c| c.votes.len()).sum()
    }

    fn choice(&self, label: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.label == label)
    }

    fn choice_mut(&mut self, label: &str) -> Option<&mut Choice> {
        self.choices.iter_mut().find(|c| c.label == label)
    }

    /// Register a new choice with no votes.
    pub fn create_choice(&mut self, label: impl Into<String>) -> Result<(), VotingError> {
        let label = label.into();
        if self.choice(&label).is_some() {
            warn!(question = %self.question, choice = %label, "choice already exists");
            return Err(VotingError::DuplicateChoice(label));
        }
        self.choices.push(Choice {
            label,
            votes: BTreeSet::new(),
        });
        Ok(())
    }

    /// Cast `voter`'s vote for each label in `selected`.
    ///
    /// Labels that match no choice are reported in the receipt and skipped.
    /// The voter is recorded exactly once however many labels succeed, even
    /// if none do.
    pub fn vote<I, S>(
        &mut self,
        voter: &Person,
        selected: I,
        today: NaiveDate,
    ) -> Result<VoteReceipt, VotingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ensure_not_voted(voter)?;

        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for label in selected {
            let label = label.as_ref();
            match self.choice_mut(label) {
                Some(choice) => {
                    if choice.votes.insert(Vote::new(voter.clone(), today)) {
                        accepted.push(label.to_string());
                    } else {
                        debug!(choice = %label, "repeated selection ignored");
                    }
                }
                None => {
                    warn!(
                        question = %self.question,
                        choice = %label,
                        "choice '{label}' does not exist"
                    );
                    rejected.push(label.to_string());
                }
            }
        }
        self.voters.push(voter.clone());
        info!(
            question = %self.question,
            voter = %voter,
            accepted = accepted.len(),
            "vote recorded"
        );

        Ok(VoteReceipt {
            voter: voter.clone(),
            date: today,
            accepted,
            rejected,
        })
    }

    /// Cast `voter`'s vote for one choice picked uniformly at random.
    pub fn vote_random(
        &mut self,
        voter: &Person,
        random: &dyn RandomSource,
        today: NaiveDate,
    ) -> Result<VoteReceipt, VotingError> {
        self.ensure_not_voted(voter)?;
        if self.choices.is_empty() {
            warn!(question = %self.question, "cannot pick a random choice: voting has no choices");
            return Err(VotingError::NoChoices);
        }

        let len = self.choices.len();
        let index = random.pick(len);
        debug!(question = %self.question, source = random.name(), "picked random choice");
        let Some(choice) = self.choices.get_mut(index) else {
            warn!(question = %self.question, index, len, "failed to vote");
            return Err(VotingError::PickOutOfRange { index, len });
        };
        choice.votes.insert(Vote::new(voter.clone(), today));
        let label = choice.label.clone();
        self.voters.push(voter.clone());
        if self.anonymous {
            info!(question = %self.question, voter = %voter, "random vote recorded");
        } else {
            info!(
                question = %self.question,
                voter = %voter,
                choice = %label,
                "random vote recorded"
            );
        }

        Ok(VoteReceipt {
            voter: voter.clone(),
            date: today,
            accepted: vec![label],
            rejected: Vec::new(),
        })
    }

    fn ensure_not_voted(&self, voter: &Person) -> Result<(), VotingError> {
        if self.has_voted(voter) {
            warn!(question = %self.question, voter = %voter, "you have already voted");
            return Err(VotingError::AlreadyVoted(voter.clone()));
        }
        Ok(())
    }

    pub fn results(&self) -> ResultsReport {
        ResultsReport {
            question: self.question.clone(),
            tallies: self
                .choices
                .iter()
                .map(|c| ChoiceTally {
                    label: c.label.clone(),
                    votes: c.votes.len(),
                })
                .collect(),
        }
    }

    pub fn voters_report(&self) -> VotersReport {
        if self.anonymous {
            return VotersReport::Anonymous;
        }
        VotersReport::Listed(
            self.choices
                .iter()
                .map(|c| ChoiceVoters {
                    label: c.label.clone(),
                    votes: c.votes.iter().cloned().collect(),
                })
                .collect(),
        )
    }

    pub fn summary(&self) -> VotingSummary {
        VotingSummary {
            question: self.question.clone(),
            anonymous: self.anonymous,
            choices: self.choices.iter().map(|c| c.label.clone()).collect(),
        }
    }

    /// Emit the vote count of every choice.
    pub fn print_results(&self) -> ResultsReport {
        let report = self.results();
        info!(question = %report.question, "results");
        for tally in &report.tallies {
            info!(
                choice = %tally.label,
                votes = tally.votes,
                "{} with {} votes",
                tally.label,
                tally.votes
            );
        }
        report
    }

    /// Emit who voted for each choice, or only a notice if the session is anonymous.
    pub fn print_voters(&self) -> VotersReport {
        let report = self.voters_report();
        match &report {
            VotersReport::Anonymous => info!(question = %self.question, "voting is anonymous"),
            VotersReport::Listed(choices) => {
                for choice in choices {
                    info!(choice = %choice.label, "voters for {}", choice.label);
                    for vote in &choice.votes {
                        info!(
                            choice = %choice.label,
                            voter = %vote.voter(),
                            date = %vote.date(),
                            "{vote}"
                        );
                    }
                }
            }
        }
        report
    }

    /// Emit the question and its choices.
    pub fn print_voting(&self) -> VotingSummary {
        let summary = self.summary();
        info!(question = %summary.question, "question for this voting: {}", summary.question);
        for choice in &summary.choices {
            info!(choice = %choice, "choice");
        }
        summary
    }
}

impl PartialEq for Voting {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.anonymous == other.anonymous
            && self.question == other.question
            && self.voters == other.voters
            && self.choices.len() == other.choices.len()
            && self
                .choices
                .iter()
                .all(|c| other.choice(&c.label).is_some_and(|o| o.votes == c.votes))
    }
}

impl Eq for Voting {}
