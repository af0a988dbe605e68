use std::collections::{BTreeMap, BTreeSet};

use super::Pair;

/// Candidate pairs grouped by the quantity one person observes.
///
/// Buckets are never left empty: every operation that removes pairs also
/// drops the keys it empties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairIndex {
    buckets: BTreeMap<u64, BTreeSet<Pair>>,
}

impl PairIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: u64, pair: Pair) {
        self.buckets.entry(key).or_default().insert(pair);
    }

    pub fn get(&self, key: u64) -> Option<&BTreeSet<Pair>> {
        self.buckets.get(&key)
    }

    /// Number of keys (not pairs) in the index.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn buckets(&self) -> impl Iterator<Item = (u64, &BTreeSet<Pair>)> {
        self.buckets.iter().map(|(key, pairs)| (*key, pairs))
    }

    pub fn contains_pair(&self, pair: &Pair) -> bool {
        self.buckets.values().any(|pairs| pairs.contains(pair))
    }

    /// Keys whose bucket holds a single pair, along with that pair.
    pub fn sole_occupants(&self) -> impl Iterator<Item = (u64, Pair)> + '_ {
        self.buckets.iter().filter_map(|(key, pairs)| {
            if pairs.len() == 1 {
                pairs.iter().next().map(|pair| (*key, *pair))
            } else {
                None
            }
        })
    }

    pub fn remove_bucket(&mut self, key: u64) -> Option<BTreeSet<Pair>> {
        self.buckets.remove(&key)
    }

    /// Removes every pair in `removed` from every bucket, pruning buckets left empty.
    pub fn remove_pairs(&mut self, removed: &BTreeSet<Pair>) {
        if removed.is_empty() {
            return;
        }
        self.buckets.retain(|_, pairs| {
            pairs.retain(|pair| !removed.contains(pair));
            !pairs.is_empty()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(entries: &[(u64, &str)]) -> PairIndex {
        let mut index = PairIndex::new();
        for (key, pair) in entries {
            index.insert(*key, Pair::parse(pair));
        }
        index
    }

    #[test]
    fn test_insert_creates_buckets_lazily() {
        let index = index_of(&[(6, "1,6"), (6, "2,3"), (4, "1,4")]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(6).map(|pairs| pairs.len()), Some(2));
        assert_eq!(index.get(5), None);
    }

    #[test]
    fn test_sole_occupants() {
        let index = index_of(&[(6, "1,6"), (6, "2,3"), (4, "1,4"), (1, "1,1")]);
        let sole: Vec<(u64, Pair)> = index.sole_occupants().collect();
        assert_eq!(
            sole,
            vec![(1, Pair::parse("1,1")), (4, Pair::parse("1,4"))]
        );
    }

    #[test]
    fn test_remove_pairs_prunes_empty_buckets() {
        let mut index = index_of(&[(6, "1,6"), (6, "2,3"), (4, "1,4")]);
        let removed = BTreeSet::from([Pair::parse("1,4"), Pair::parse("2,3")]);

        index.remove_pairs(&removed);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(4), None);
        assert_eq!(
            index.get(6),
            Some(&BTreeSet::from([Pair::parse("1,6")]))
        );
        assert!(!index.contains_pair(&Pair::parse("2,3")));
        assert!(index.buckets().all(|(_, pairs)| !pairs.is_empty()));
    }

    #[test]
    fn test_remove_bucket() {
        let mut index = index_of(&[(4, "1,4"), (4, "2,2")]);
        let bucket = index.remove_bucket(4).unwrap();
        assert_eq!(bucket.len(), 2);
        assert!(index.is_empty());
        assert_eq!(index.remove_bucket(4), None);
    }
}
