//! Read-only views of a session handed back to callers.
//!
//! Every report implements `Display` with the plain-text layout shown on the
//! console, and `Serialize` for structured consumers.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tally_types::{Person, Vote};

/// Outcome of a single vote call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteReceipt {
    pub voter: Person,
    pub date: NaiveDate,
    /// Labels that received the vote, in the order they were submitted.
    pub accepted: Vec<String>,
    /// Labels that did not match any choice.
    pub rejected: Vec<String>,
}

impl VoteReceipt {
    /// Whether every submitted label was accepted.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Vote count for one choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceTally {
    pub label: String,
    pub votes: usize,
}

/// Vote counts for every choice of a session, in creation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultsReport {
    pub question: String,
    pub tallies: Vec<ChoiceTally>,
}

impl ResultsReport {
    pub fn votes_for(&self, label: &str) -> Option<usize> {
        self.tallies
            .iter()
            .find(|t| t.label == label)
            .map(|t| t.votes)
    }

    /// Sum over all choices. Counts accepted labels, not voters.
    pub fn total(&self) -> usize {
        self.tallies.iter().map(|t| t.votes).sum()
    }
}

impl fmt::Display for ResultsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        for tally in &self.tallies {
            writeln!(f, "{} with {} votes", tally.label, tally.votes)?;
        }
        Ok(())
    }
}

/// The votes recorded against one choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceVoters {
    pub label: String,
    pub votes: Vec<Vote>,
}

/// Who voted for what. Withheld entirely for anonymous sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "choices", rename_all = "lowercase")]
pub enum VotersReport {
    Anonymous,
    Listed(Vec<ChoiceVoters>),
}

impl fmt::Display for VotersReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => writeln!(f, "Voting is anonymous!"),
            Self::Listed(choices) => {
                for choice in choices {
                    writeln!(f, "Voters for {}:", choice.label)?;
                    for vote in &choice.votes {
                        writeln!(f, "  {vote}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// The question and its choice labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VotingSummary {
    pub question: String,
    pub anonymous: bool,
    pub choices: Vec<String>,
}

impl fmt::Display for VotingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Question for this voting: {}", self.question)?;
        for choice in &self.choices {
            writeln!(f, "- {choice}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> ResultsReport {
        ResultsReport {
            question: "q".into(),
            tallies: vec![
                ChoiceTally {
                    label: "first".into(),
                    votes: 2,
                },
                ChoiceTally {
                    label: "second".into(),
                    votes: 0,
                },
            ],
        }
    }

    #[test]
    fn results_lookup_and_total() {
        let r = results();
        assert_eq!(r.votes_for("first"), Some(2));
        assert_eq!(r.votes_for("third"), None);
        assert_eq!(r.total(), 2);
    }

    #[test]
    fn results_display() {
        assert_eq!(
            results().to_string(),
            "Results:\nfirst with 2 votes\nsecond with 0 votes\n"
        );
    }

    #[test]
    fn anonymous_display_is_only_the_notice() {
        assert_eq!(VotersReport::Anonymous.to_string(), "Voting is anonymous!\n");
    }

    #[test]
    fn listed_display_shows_voter_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let report = VotersReport::Listed(vec![ChoiceVoters {
            label: "first".into(),
            votes: vec![Vote::new(Person::new("P1", "LP1"), date)],
        }]);
        assert_eq!(report.to_string(), "Voters for first:\n  P1 LP1 at 2024-05-01\n");
    }
}
