//! Nullable clock: deterministic dates for testing.

use chrono::{Days, NaiveDate};
use std::sync::{Arc, Mutex};
use tally_voting::Clock;

/// A deterministic clock for testing.
///
/// The date only advances when you tell it to. Clones share the same date,
/// so a test can keep a handle after boxing one into a `VotingSystem`.
#[derive(Clone)]
pub struct NullClock {
    current: Arc<Mutex<NaiveDate>>,
}

impl NullClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current: Arc::new(Mutex::new(today)),
        }
    }

    /// Start at the given calendar day.
    ///
    /// # Panics
    /// Panics if the date does not exist.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date"))
    }

    /// Advance the date by a number of days.
    pub fn advance_days(&self, days: u64) {
        let mut current = self.current.lock().unwrap();
        *current = *current + Days::new(days);
    }

    /// Set the date to a specific value.
    pub fn set(&self, today: NaiveDate) {
        *self.current.lock().unwrap() = today;
    }
}

impl Clock for NullClock {
    fn today(&self) -> NaiveDate {
        *self.current.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_all_clones() {
        let clock = NullClock::ymd(2024, 2, 28);
        let handle = clock.clone();
        handle.advance_days(2);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn set_overrides_date() {
        let clock = NullClock::ymd(2024, 1, 1);
        let d = NaiveDate::from_ymd_opt(2030, 12, 31).unwrap();
        clock.set(d);
        assert_eq!(clock.today(), d);
    }
}
