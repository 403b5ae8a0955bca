//! Frequency counting and mode selection over a column of values.
//!
//! Counts are kept in first-seen order so that ties resolve the same way on
//! every run: among values sharing the highest count, the one that appeared
//! first in row order wins.

use std::hash::Hash;

use indexmap::IndexMap;

/// Occurrence counts for a column, in first-seen order.
#[derive(Debug, Clone)]
pub struct ValueCounts<T: Hash + Eq> {
    counts: IndexMap<T, usize>,
    total: usize,
}

impl<T: Hash + Eq> ValueCounts<T> {
    /// Count every value yielded by `values`.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut counts: IndexMap<T, usize> = IndexMap::new();
        let mut total = 0usize;
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Number of values counted (not distinct values).
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The most frequent value and its count. `None` when nothing was counted.
    pub fn into_mode(self) -> Option<(T, usize)> {
        let mut best: Option<(T, usize)> = None;
        for (value, count) in self.counts {
            // Strictly greater: an equal count never displaces an earlier value.
            if best.as_ref().map_or(true, |(_, top)| count > *top) {
                best = Some((value, count));
            }
        }
        best
    }

    /// All `(value, count)` pairs, most frequent first; ties keep first-seen
    /// order.
    pub fn into_sorted(self) -> Vec<(T, usize)> {
        let mut pairs: Vec<(T, usize)> = self.counts.into_iter().collect();
        // `sort_by` is stable, so first-seen order survives among equal counts.
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_totals() {
        let counts = ValueCounts::from_values(["a", "b", "a", "c", "a"]);
        assert_eq!(counts.total(), 5);
        assert!(!counts.is_empty());
        assert_eq!(
            counts.into_sorted(),
            vec![("a", 3), ("b", 1), ("c", 1)]
        );
    }

    #[test]
    fn test_mode_picks_highest_count() {
        let counts = ValueCounts::from_values([3, 1, 3, 2, 2, 3]);
        assert_eq!(counts.into_mode(), Some((3, 3)));
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen_value() {
        // "b" reaches two occurrences first, but "a" was seen first.
        let counts = ValueCounts::from_values(["a", "b", "b", "a"]);
        assert_eq!(counts.into_mode(), Some(("a", 2)));
    }

    #[test]
    fn test_mode_of_nothing_is_none() {
        let counts: ValueCounts<u32> = ValueCounts::from_values(Vec::new());
        assert!(counts.is_empty());
        assert_eq!(counts.into_mode(), None);
    }

    #[test]
    fn test_mode_is_deterministic() {
        let values = vec!["x", "y", "z", "y", "x", "z"];
        let first = ValueCounts::from_values(values.clone()).into_mode();
        let second = ValueCounts::from_values(values).into_mode();
        assert_eq!(first, second);
        assert_eq!(first, Some(("x", 2)));
    }

    #[test]
    fn test_into_sorted_orders_by_count_then_first_seen() {
        let counts = ValueCounts::from_values([
            "Customer",
            "Dependent",
            "Subscriber",
            "Subscriber",
            "Customer",
        ]);
        assert_eq!(
            counts.into_sorted(),
            vec![("Customer", 2), ("Subscriber", 2), ("Dependent", 1)]
        );
    }
}
