//! Jaccard similarity over sets and multisets
//!
//! - [`Jaccard`]: `|a ∩ b| / |a ∪ b|` over sets
//! - [`GeneralizedJaccard`]: `Σ min(aₜ, bₜ) / Σ max(aₜ, bₜ)` over token counts
//!
//! When no token repeats, every count is 1 and the generalized form
//! collapses to plain Jaccard.

use std::hash::Hash;

use ahash::AHashSet;

use super::{empty_aware, Distance, Metric};
use crate::multiset::Multiset;

/// Number of elements shared by two sets, iterating the smaller one.
pub(crate) fn intersection_len<T: Hash + Eq>(a: &AHashSet<T>, b: &AHashSet<T>) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|item| large.contains(*item)).count()
}

/// Sum of per-token minimum counts, i.e. the size of the multiset intersection.
pub(crate) fn min_overlap<T: Hash + Eq>(a: &Multiset<T>, b: &Multiset<T>) -> usize {
    let (small, large) = if a.distinct_len() <= b.distinct_len() {
        (a, b)
    } else {
        (b, a)
    };
    small
        .iter()
        .map(|(token, count)| count.min(large.count(token)))
        .sum()
}

/// Jaccard similarity over sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaccard;

impl Jaccard {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Hash + Eq> Metric<AHashSet<T>> for Jaccard {
    fn compare(&self, a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
        empty_aware(a.is_empty(), b.is_empty(), || {
            let intersection = intersection_len(a, b);
            intersection as f64 / (a.len() + b.len() - intersection) as f64
        })
    }
}

impl<T: Hash + Eq> Distance<AHashSet<T>> for Jaccard {
    fn distance(&self, a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
        1.0 - self.compare(a, b)
    }
}

/// Jaccard similarity over token counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralizedJaccard;

impl GeneralizedJaccard {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Hash + Eq> Metric<Multiset<T>> for GeneralizedJaccard {
    fn compare(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        empty_aware(a.is_empty(), b.is_empty(), || {
            // Σmax = |a| + |b| - Σmin
            let intersection = min_overlap(a, b);
            intersection as f64 / (a.len() + b.len() - intersection) as f64
        })
    }
}

impl<T: Hash + Eq> Distance<Multiset<T>> for GeneralizedJaccard {
    fn distance(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        1.0 - self.compare(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.0001
    }

    fn set(s: &str) -> AHashSet<&str> {
        s.split_whitespace().collect()
    }

    fn bag(s: &str) -> Multiset<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn test_jaccard() {
        let jaccard = Jaccard::new();
        assert!(approx_eq(jaccard.compare(&set("test string1"), &set("test string2")), 0.3333));
        assert!(approx_eq(jaccard.compare(&set("test"), &set("test string2")), 0.5));
        assert!(approx_eq(jaccard.distance(&set("test string1"), &set("test string2")), 0.6666));
        assert_eq!(jaccard.compare(&set(""), &set("")), 1.0);
        assert_eq!(jaccard.compare(&set("a"), &set("")), 0.0);
    }

    #[test]
    fn test_generalized_jaccard_matches_jaccard_without_repeats() {
        let jaccard = Jaccard::new();
        let generalized = GeneralizedJaccard::new();
        for (a, b) in [("test string1", "test string2"), ("test", "test string2"), ("a b c", "d e")] {
            assert!(approx_eq(
                generalized.compare(&bag(a), &bag(b)),
                jaccard.compare(&set(a), &set(b))
            ));
        }
    }

    #[test]
    fn test_generalized_jaccard_counts_repeats() {
        let generalized = GeneralizedJaccard::new();
        // min: a=1, b=1 -> 2; max: a=3, b=1, c=1 -> 5
        assert!(approx_eq(generalized.compare(&bag("a a a b c"), &bag("a b")), 0.4));
        // As sets only "c" is unshared
        assert!(approx_eq(Jaccard::new().compare(&set("a a a b c"), &set("a b")), 2.0 / 3.0));
    }
}
