use serde::{Deserialize, Serialize};

/// A candidate answer: two numbers with `a <= b`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(from = "(u64, u64)", into = "(u64, u64)")]
pub struct Pair {
    pub a: u64,
    pub b: u64,
}

impl Pair {
    /// Builds a pair, swapping the numbers if needed so that `a <= b`.
    pub fn new(a: u64, b: u64) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Both numbers must stay below 2^32 for the product to fit in a `u64`.
    pub fn product(&self) -> u64 {
        debug_assert!(self.b <= u64::from(u32::MAX), "pair {} too large", self);
        self.a * self.b
    }

    pub fn sum(&self) -> u64 {
        self.a + self.b
    }

    #[cfg(test)]
    /// Parse a pair from a string of the form "4,13" or "(4, 13)".
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed.split(',').map(|part| part.trim().parse::<u64>().unwrap());
        let a = parts.next().unwrap();
        let b = parts.next().unwrap();
        Self::new(a, b)
    }
}

impl From<(u64, u64)> for Pair {
    fn from((a, b): (u64, u64)) -> Self {
        Self::new(a, b)
    }
}

impl From<Pair> for (u64, u64) {
    fn from(pair: Pair) -> Self {
        (pair.a, pair.b)
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

impl std::fmt::Debug for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}
