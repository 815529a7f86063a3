use proptest::prelude::*;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use tally_types::{Person, Vote, VoterId};

proptest! {
    /// Person equality follows the id, never the name alone.
    #[test]
    fn person_equality_requires_same_id(
        a in 0u64..1_000,
        b in 0u64..1_000,
        first in "[A-Z][a-z]{0,8}",
        last in "[A-Z][a-z]{0,8}",
    ) {
        let pa = Person::with_id(VoterId::new(a), first.clone(), last.clone());
        let pb = Person::with_id(VoterId::new(b), first, last);
        prop_assert_eq!(pa == pb, a == b);
        prop_assert_eq!(pa.is_same_voter(&pb), a == b);
    }

    /// A vote set keeps one entry per (voter, date) pair.
    #[test]
    fn vote_set_dedupes_same_voter_same_day(
        ids in prop::collection::vec(0u64..5, 1..20),
        day in 1u32..28,
    ) {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let set: BTreeSet<Vote> = ids
            .iter()
            .map(|&id| Vote::new(Person::with_id(VoterId::new(id), "F", "L"), date))
            .collect();
        let distinct: BTreeSet<u64> = ids.into_iter().collect();
        prop_assert_eq!(set.len(), distinct.len());
    }

    /// Issued ids are unique.
    #[test]
    fn issued_ids_never_repeat(n in 1usize..50) {
        let ids: BTreeSet<VoterId> = (0..n).map(|_| Person::new("A", "B").id()).collect();
        prop_assert_eq!(ids.len(), n);
    }
}
