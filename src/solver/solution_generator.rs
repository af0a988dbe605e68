use std::iter::FusedIterator;

use log::{debug, trace};

use crate::model::{Person, RoundResult};

use super::candidate_space::CandidateSpace;
use super::elimination::{find_possible_solution, remove_candidates};

/// Plays the puzzle round by round, starting with Peter.
///
/// Yields one [`RoundResult`] per round and stops after the first round in
/// which no candidate could be eliminated.
#[derive(Debug, Clone)]
pub struct SolutionGenerator {
    space: CandidateSpace,
    round: usize,
    turn: Person,
    finished: bool,
}

/// Lazily plays the puzzle for numbers in `1..max_number`.
pub fn generate_solutions(max_number: u64) -> SolutionGenerator {
    SolutionGenerator::new(max_number)
}

impl SolutionGenerator {
    pub fn new(max_number: u64) -> Self {
        Self {
            space: CandidateSpace::new(max_number),
            round: 0,
            turn: Person::Peter,
            finished: false,
        }
    }

    /// The last round played, 0 before the first one.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Who speaks in the next round.
    pub fn turn(&self) -> Person {
        self.turn
    }

    pub fn space(&self) -> &CandidateSpace {
        &self.space
    }

    /// True once a round has eliminated nothing.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn play_round(&mut self) -> RoundResult {
        self.round += 1;
        let person = self.turn;
        let pairs_last_round = self.space.len();

        let (own, other, candidates) = self.space.split_for(person);
        let result = find_possible_solution(self.round, own, person);
        let removed = remove_candidates(own, other, candidates);

        trace!(
            target: "solver",
            "Round {} ({} observes the {}): removed {:?}",
            self.round,
            person,
            person.observes(),
            removed
        );

        if self.space.len() == pairs_last_round {
            debug!(
                target: "solver",
                "Fixed point reached at round {} with {} candidates left",
                self.round,
                self.space.len()
            );
            self.finished = true;
        } else {
            self.turn = person.other();
        }
        result
    }
}

impl Iterator for SolutionGenerator {
    type Item = RoundResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.play_round())
    }
}

impl FusedIterator for SolutionGenerator {}
