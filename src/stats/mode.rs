//! Frequency counting with first-occurrence ordering.

use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// Occurrences of each distinct value, keyed in first-seen order.
pub fn tally<T, I>(values: I) -> IndexMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// The most frequent value. Among equally frequent values the one that
/// appeared first wins. `None` for empty input.
pub fn first_mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally(values) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// A category label with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Counts per distinct value, highest count first. Ties keep first-seen order.
pub fn value_counts<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<CategoryCount> = tally(values)
        .into_iter()
        .map(|(value, count)| CategoryCount {
            value: value.to_string(),
            count,
        })
        .collect();
    // stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_mode_simple() {
        assert_eq!(first_mode(["A", "A", "B"]), Some("A"));
    }

    #[test]
    fn test_first_mode_tie_prefers_first_seen() {
        assert_eq!(first_mode([5, 5, 9, 9]), Some(5));
        assert_eq!(first_mode([9, 5, 5, 9]), Some(9));
        assert_eq!(first_mode([3, 1, 2]), Some(3));
    }

    #[test]
    fn test_first_mode_later_majority_wins() {
        assert_eq!(first_mode([1, 2, 2, 3, 3, 3]), Some(3));
    }

    #[test]
    fn test_first_mode_empty() {
        assert_eq!(first_mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_value_counts_ordering() {
        let counts = value_counts(["Customer", "Subscriber", "Subscriber", "Dependent"]);
        let pairs: Vec<_> = counts.iter().map(|c| (c.value.as_str(), c.count)).collect();
        assert_eq!(
            pairs,
            vec![("Subscriber", 2), ("Customer", 1), ("Dependent", 1)]
        );
    }

    #[test]
    fn test_value_counts_empty() {
        assert!(value_counts(Vec::<&str>::new()).is_empty());
    }
}
