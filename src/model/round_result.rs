use serde::{Deserialize, Serialize};

use super::{Pair, Person};

/// A person announcing that they (could) know the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    pub person: Person,
    #[serde(rename = "numbers")]
    pub pair: Pair,
}

impl Deduction {
    pub fn new(person: Person, pair: Pair) -> Self {
        Self { person, pair }
    }
}

impl std::fmt::Display for Deduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: \"I (could) know the numbers.\" {}",
            self.person, self.pair
        )
    }
}

/// Outcome of one round. `result` is `None` when nobody could single out a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: usize,
    pub result: Option<Deduction>,
}

impl RoundResult {
    pub fn unsolved(round: usize) -> Self {
        Self {
            round,
            result: None,
        }
    }

    pub fn solved(round: usize, person: Person, pair: Pair) -> Self {
        Self {
            round,
            result: Some(Deduction::new(person, pair)),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.result.is_some()
    }
}
