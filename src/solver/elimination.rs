use std::collections::BTreeSet;

use itertools::Itertools;
use log::trace;

use crate::model::{Pair, PairIndex, Person, RoundResult};

/// Could `person` know the numbers this round?
///
/// Every bucket holding a single pair makes that pair deducible. The round
/// only counts as solved when exactly one distinct pair is deducible.
pub fn find_possible_solution(round: usize, index: &PairIndex, person: Person) -> RoundResult {
    let possible: BTreeSet<Pair> = index.sole_occupants().map(|(_, pair)| pair).collect();

    trace!(
        target: "solver",
        "Round {}: {} could know {} pair(s)",
        round,
        person,
        possible.len()
    );

    match possible.iter().exactly_one() {
        Ok(pair) => RoundResult::solved(round, person, *pair),
        Err(_) => RoundResult::unsolved(round),
    }
}

/// Applies what everybody learns from `from`'s owner not announcing a solution.
///
/// Pairs alone in a bucket of `from` would have been known, so they are
/// dropped from the candidates, their buckets are removed from `from`, and
/// every other bucket of both indexes forgets them. Returns the eliminated pairs.
pub fn remove_candidates(
    from: &mut PairIndex,
    other: &mut PairIndex,
    candidates: &mut BTreeSet<Pair>,
) -> BTreeSet<Pair> {
    let sole_occupants: Vec<(u64, Pair)> = from.sole_occupants().collect();

    let mut removed = BTreeSet::new();
    for (key, pair) in sole_occupants {
        removed.insert(pair);
        candidates.remove(&pair);
        from.remove_bucket(key);
    }

    from.remove_pairs(&removed);
    other.remove_pairs(&removed);

    trace!(
        target: "solver",
        "Eliminated {} pair(s), {} candidates remain",
        removed.len(),
        candidates.len()
    );
    removed
}

#[cfg(test)]
mod tests {
    use test_context::test_context;

    use super::*;
    use crate::solver::CandidateSpace;
    use crate::tests::UsingLogger;

    #[test]
    fn test_single_pair_is_deduced_by_peter() {
        let space = CandidateSpace::new(2);
        let result = find_possible_solution(1, space.index(Person::Peter), Person::Peter);
        assert_eq!(result, RoundResult::solved(1, Person::Peter, Pair::new(1, 1)));
    }

    #[test]
    fn test_several_deducible_pairs_do_not_count() {
        // products 1, 2 and 3 each have a single pair
        let space = CandidateSpace::new(4);
        let result = find_possible_solution(1, space.index(Person::Peter), Person::Peter);
        assert_eq!(result, RoundResult::unsolved(1));
    }

    #[test]
    fn test_no_deducible_pairs() {
        let mut index = PairIndex::new();
        index.insert(6, Pair::new(1, 6));
        index.insert(6, Pair::new(2, 3));
        let result = find_possible_solution(3, &index, Person::Sandy);
        assert_eq!(result, RoundResult::unsolved(3));

        let result = find_possible_solution(4, &PairIndex::new(), Person::Peter);
        assert_eq!(result, RoundResult::unsolved(4));
    }

    #[test]
    fn test_exactly_one_deducible_pair() {
        let mut index = PairIndex::new();
        index.insert(6, Pair::new(1, 6));
        index.insert(6, Pair::new(2, 3));
        index.insert(4, Pair::new(1, 4));
        let result = find_possible_solution(2, &index, Person::Sandy);
        assert_eq!(result, RoundResult::solved(2, Person::Sandy, Pair::new(1, 4)));
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_remove_candidates(_: &mut UsingLogger) {
        let mut space = CandidateSpace::new(5);
        let (products, sums, candidates) = space.split_for(Person::Peter);

        let removed = remove_candidates(products, sums, candidates);

        // products 1, 2, 3, 6, 8, 9, 12, 16 are unique below 5; only 4 = 1*4 = 2*2 is shared
        assert_eq!(
            removed,
            BTreeSet::from([
                Pair::new(1, 1),
                Pair::new(1, 2),
                Pair::new(1, 3),
                Pair::new(2, 3),
                Pair::new(2, 4),
                Pair::new(3, 3),
                Pair::new(3, 4),
                Pair::new(4, 4),
            ])
        );
        assert_eq!(
            space.candidates(),
            &BTreeSet::from([Pair::new(1, 4), Pair::new(2, 2)])
        );

        let products = space.index(Person::Peter);
        assert_eq!(products.len(), 1);
        assert_eq!(products.get(4).map(|pairs| pairs.len()), Some(2));

        let sums = space.index(Person::Sandy);
        let sum_keys: Vec<u64> = sums.buckets().map(|(key, _)| key).collect();
        assert_eq!(sum_keys, vec![4, 5]);
        for (_, pairs) in sums.buckets() {
            assert_eq!(pairs.len(), 1);
        }
    }

    #[test]
    fn test_remove_candidates_without_sole_occupants_is_a_no_op() {
        let mut from = PairIndex::new();
        from.insert(6, Pair::new(1, 6));
        from.insert(6, Pair::new(2, 3));
        let mut other = PairIndex::new();
        other.insert(7, Pair::new(1, 6));
        other.insert(5, Pair::new(2, 3));
        let mut candidates = BTreeSet::from([Pair::new(1, 6), Pair::new(2, 3)]);

        let before = (from.clone(), other.clone(), candidates.clone());
        let removed = remove_candidates(&mut from, &mut other, &mut candidates);

        assert!(removed.is_empty());
        assert_eq!((from, other, candidates), before);
    }
}
