use std::collections::BTreeSet;

use log::trace;

use crate::model::{Pair, PairIndex, Person};

/// Every pair still considered possible, plus the two indexes derived from it.
///
/// The candidate set is the authoritative collection; a pair sits in the
/// product bucket `a * b` and the sum bucket `a + b` iff it is still a candidate.
#[derive(Debug, Clone, Default)]
pub struct CandidateSpace {
    candidates: BTreeSet<Pair>,
    products: PairIndex,
    sums: PairIndex,
}

impl CandidateSpace {
    /// Builds the space of every pair `(a, b)` with `1 <= a <= b < max_number`.
    pub fn new(max_number: u64) -> Self {
        let mut space = Self::default();
        for a in 1..max_number {
            for b in a..max_number {
                space.insert(Pair::new(a, b));
            }
        }
        trace!(
            target: "solver",
            "Built {} candidates, {} products, {} sums for N = {}",
            space.candidates.len(),
            space.products.len(),
            space.sums.len(),
            max_number
        );
        space
    }

    fn insert(&mut self, pair: Pair) {
        self.candidates.insert(pair);
        self.products.insert(Person::Peter.key(&pair), pair);
        self.sums.insert(Person::Sandy.key(&pair), pair);
    }

    pub fn candidates(&self) -> &BTreeSet<Pair> {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The index holding what `person` observes.
    pub fn index(&self, person: Person) -> &PairIndex {
        match person {
            Person::Peter => &self.products,
            Person::Sandy => &self.sums,
        }
    }

    /// Splits the space into `person`'s index, the other person's index, and the candidates.
    pub(crate) fn split_for(
        &mut self,
        person: Person,
    ) -> (&mut PairIndex, &mut PairIndex, &mut BTreeSet<Pair>) {
        match person {
            Person::Peter => (&mut self.products, &mut self.sums, &mut self.candidates),
            Person::Sandy => (&mut self.sums, &mut self.products, &mut self.candidates),
        }
    }
}
