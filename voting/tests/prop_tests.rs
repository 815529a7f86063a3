use proptest::prelude::*;
use std::collections::HashSet;

use tally_nullables::{NullClock, NullRandom};
use tally_types::{Person, VoterId};
use tally_voting::VotingSystem;

const LABELS: [&str; 4] = ["first", "second", "third", "missing"];

#[derive(Debug, Clone)]
enum Op {
    Vote { voter: u64, picks: Vec<usize> },
    Random { voter: u64 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..6, prop::collection::vec(0usize..4, 0..4))
            .prop_map(|(voter, picks)| Op::Vote { voter, picks }),
        (0u64..6).prop_map(|voter| Op::Random { voter }),
    ]
}

fn fresh(script: Vec<usize>) -> VotingSystem {
    let mut sys = VotingSystem::with_sources(
        Box::new(NullClock::ymd(2024, 1, 1)),
        Box::new(NullRandom::new(script)),
    );
    sys.create_voting("only", false, 0, ["first", "second", "third"]);
    sys
}

proptest! {
    /// Total votes equal the number of accepted labels, never the voter count.
    #[test]
    fn total_votes_match_accepted_labels(
        ops in prop::collection::vec(op(), 0..40),
        script in prop::collection::vec(0usize..10, 1..8),
    ) {
        let mut sys = fresh(script);
        let mut accepted = 0usize;
        for op in ops {
            let result = match op {
                Op::Vote { voter, picks } => {
                    let person = Person::with_id(VoterId::new(voter), "V", "X");
                    sys.vote(0, &person, picks.iter().map(|&i| LABELS[i]))
                }
                Op::Random { voter } => {
                    sys.vote_random(&Person::with_id(VoterId::new(voter), "V", "X"))
                }
            };
            if let Ok(receipt) = result {
                accepted += receipt.accepted.len();
            }
        }
        prop_assert_eq!(sys.results(0).unwrap().total(), accepted);
    }

    /// A voter id shows up at most once in the voters list.
    #[test]
    fn voter_recorded_at_most_once(
        ops in prop::collection::vec(op(), 0..40),
        script in prop::collection::vec(0usize..10, 1..8),
    ) {
        let mut sys = fresh(script);
        for op in ops {
            let _ = match op {
                Op::Vote { voter, picks } => sys.vote(
                    0,
                    &Person::with_id(VoterId::new(voter), "V", "X"),
                    picks.iter().map(|&i| LABELS[i]),
                ),
                Op::Random { voter } => {
                    sys.vote_random(&Person::with_id(VoterId::new(voter), "V", "X"))
                }
            };
        }
        let voters = sys.voting(0).unwrap().voters();
        let distinct: HashSet<VoterId> = voters.iter().map(|p| p.id()).collect();
        prop_assert_eq!(distinct.len(), voters.len());
    }

    /// Results only ever name created choices.
    #[test]
    fn results_only_name_created_choices(
        labels in prop::collection::vec("[a-z]{1,6}", 0..6),
        attempts in prop::collection::vec("[a-z]{1,6}", 0..6),
    ) {
        let mut sys = fresh(vec![0]);
        let index = sys.create_voting("q", false, 0, labels.clone());
        let _ = sys.vote(index, &Person::new("A", "B"), attempts);
        let created: HashSet<String> = labels.into_iter().collect();
        for tally in sys.results(index).unwrap().tallies {
            prop_assert!(created.contains(&tally.label));
        }
    }
}
