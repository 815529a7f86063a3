//! Scripted walkthrough of the voting system.

use crate::config::SessionConfig;
use crate::input::{read_choices, SENTINEL};
use std::io::{self, BufRead};
use tally_types::Person;
use tally_voting::VotingSystem;
use tracing::{info, warn};

/// Register every configured session, returning how many were created.
pub fn seed_sessions(system: &mut VotingSystem, sessions: &[SessionConfig]) -> usize {
    for session in sessions {
        system.create_voting(
            session.question.clone(),
            session.anonymous,
            session.kind,
            session.choices.iter().cloned(),
        );
    }
    system.len()
}

/// Run the demo: one interactive vote, one against a missing session, one
/// random vote, then every report.
///
/// Voting failures are reported and the walkthrough continues; only input
/// errors abort it.
pub fn run<R: BufRead>(system: &mut VotingSystem, input: R) -> io::Result<()> {
    let person1 = Person::new("P1", "LP1");
    let person2 = Person::new("P2", "LP2");
    let person3 = Person::new("P3", "LP3");

    info!("enter your choices to vote or {SENTINEL} to quit");
    let choices = read_choices(input)?;
    if let Err(e) = system.vote(0, &person1, &choices) {
        warn!(voter = %person1, "vote failed: {e}");
    }
    if let Err(e) = system.vote(5, &person2, &choices) {
        warn!(voter = %person2, "vote failed: {e}");
    }
    if let Err(e) = system.vote_random(&person3) {
        warn!(voter = %person3, "random vote failed: {e}");
    }

    let _ = system.print_voting(0);
    let _ = system.print_results(0);
    for index in 0..system.len() {
        let _ = system.print_voters(index);
    }
    Ok(())
}

/// Print the question and choices of every session.
pub fn list_sessions(system: &VotingSystem) {
    for index in 0..system.len() {
        let _ = system.print_voting(index);
    }
}
