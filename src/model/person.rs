use serde::{Deserialize, Serialize};

use super::Pair;

/// The two parties of the puzzle. Peter is told the product, Sandy the sum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Person {
    Peter,
    Sandy,
}

impl Default for Person {
    fn default() -> Self {
        Person::Peter
    }
}

impl Person {
    pub fn all() -> Vec<Person> {
        vec![Person::Peter, Person::Sandy]
    }

    /// The person who speaks after this one.
    pub fn other(&self) -> Person {
        match self {
            Person::Peter => Person::Sandy,
            Person::Sandy => Person::Peter,
        }
    }

    /// The quantity this person was told about the hidden pair.
    pub fn key(&self, pair: &Pair) -> u64 {
        match self {
            Person::Peter => pair.product(),
            Person::Sandy => pair.sum(),
        }
    }

    pub fn observes(&self) -> &'static str {
        match self {
            Person::Peter => "product",
            Person::Sandy => "sum",
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Person::Peter => write!(f, "Peter"),
            Person::Sandy => write!(f, "Sandy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        assert_eq!(Person::default(), Person::Peter);
        assert_eq!(Person::Peter.other(), Person::Sandy);
        assert_eq!(Person::Sandy.other(), Person::Peter);
        for person in Person::all() {
            assert_eq!(person.other().other(), person);
        }
    }

    #[test]
    fn test_key() {
        let pair = Pair::new(3, 5);
        assert_eq!(Person::Peter.key(&pair), 15);
        assert_eq!(Person::Sandy.key(&pair), 8);
    }
}
