//! Counted collection of tokens.

use std::hash::Hash;

use ahash::AHashMap;

/// A multiset (bag) of values backed by an `AHashMap` of counts.
///
/// Tracks the total number of occurrences so `len()` is O(1).
#[derive(Debug, Clone)]
pub struct Multiset<T: Hash + Eq> {
    counts: AHashMap<T, usize>,
    len: usize,
}

impl<T: Hash + Eq> Multiset<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: AHashMap::new(),
            len: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: AHashMap::with_capacity(capacity),
            len: 0,
        }
    }

    pub fn insert(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    /// Add `count` occurrences of `value` at once.
    pub fn insert_many(&mut self, value: T, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(value).or_insert(0) += count;
        self.len += count;
    }

    /// Keep only the values for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let mut removed = 0;
        self.counts.retain(|value, count| {
            let kept = keep(value);
            if !kept {
                removed += *count;
            }
            kept
        });
        self.len -= removed;
    }

    /// Number of occurrences of `value`.
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Total number of occurrences, counting repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct values.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over distinct values with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(value, &count)| (value, count))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.counts.contains_key(value)
    }
}

impl<T: Hash + Eq> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for Multiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.counts == other.counts
    }
}

impl<T: Hash + Eq> Eq for Multiset<T> {}

impl<T: Hash + Eq> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut multiset = Self::with_capacity(iter.size_hint().0);
        for item in iter {
            multiset.insert(item);
        }
        multiset
    }
}

impl<T: Hash + Eq> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_len() {
        let bag: Multiset<&str> = ["a", "b", "a", "c", "a"].into_iter().collect();
        assert_eq!(bag.len(), 5);
        assert_eq!(bag.distinct_len(), 3);
        assert_eq!(bag.count(&"a"), 3);
        assert_eq!(bag.count(&"z"), 0);
        assert!(bag.contains(&"b"));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: Multiset<char> = "abca".chars().collect();
        let b: Multiset<char> = "aacb".chars().collect();
        let c: Multiset<char> = "abc".chars().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_insert_many_and_retain() {
        let mut bag: Multiset<&str> = Multiset::new();
        bag.insert_many("a", 3);
        bag.insert_many("b", 0);
        bag.insert("c");
        assert_eq!(bag.len(), 4);
        assert!(!bag.contains(&"b"));

        bag.retain(|v| *v != "a");
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.count(&"c"), 1);
    }

    #[test]
    fn test_empty() {
        let bag: Multiset<String> = Multiset::default();
        assert!(bag.is_empty());
        assert_eq!(bag.iter().count(), 0);
    }
}
