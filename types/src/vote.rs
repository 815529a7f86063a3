//! A single cast vote.

use crate::person::Person;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vote cast by a person on a given calendar day.
///
/// Equality is by (voter, date): the same voter casting for the same choice
/// twice on one day collapses to a single entry in a vote set.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vote {
    voter: Person,
    date: NaiveDate,
}

impl Vote {
    pub fn new(voter: Person, date: NaiveDate) -> Self {
        Self { voter, date }
    }

    pub fn voter(&self) -> &Person {
        &self.voter
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.voter, self.date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn equal_by_voter_and_date() {
        let p = Person::new("P1", "LP1");
        assert_eq!(Vote::new(p.clone(), day(1)), Vote::new(p.clone(), day(1)));
        assert_ne!(Vote::new(p.clone(), day(1)), Vote::new(p, day(2)));
    }

    #[test]
    fn display_uses_iso_date() {
        let v = Vote::new(Person::new("P1", "LP1"), day(7));
        assert_eq!(v.to_string(), "P1 LP1 at 2024-03-07");
    }
}
