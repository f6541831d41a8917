//! Overlap coefficient: `|a ∩ b| / min(|a|, |b|)`
//!
//! Scores 1.0 whenever one set contains the other, so distinct inputs can
//! compare as identical. The coefficient does not satisfy coincidence.

use std::hash::Hash;

use ahash::AHashSet;

use super::jaccard::intersection_len;
use super::{empty_aware, Distance, Metric};

/// Overlap coefficient over sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapCoefficient;

impl OverlapCoefficient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Hash + Eq> Metric<AHashSet<T>> for OverlapCoefficient {
    fn compare(&self, a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
        empty_aware(a.is_empty(), b.is_empty(), || {
            intersection_len(a, b) as f64 / a.len().min(b.len()) as f64
        })
    }
}

impl<T: Hash + Eq> Distance<AHashSet<T>> for OverlapCoefficient {
    fn distance(&self, a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
        1.0 - self.compare(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_integers() {
        let overlap = OverlapCoefficient::new();
        let a: AHashSet<i32> = [1, 1, 2, 3, 5, 8, 11, 19].into_iter().collect();
        let b: AHashSet<i32> = [1, 2, 4, 8, 16, 32, 64].into_iter().collect();
        assert!((overlap.compare(&a, &b) - 0.4285).abs() < 0.0001);
    }

    #[test]
    fn test_overlap_subset_is_one() {
        let overlap = OverlapCoefficient::new();
        let a: AHashSet<&str> = ["test"].into_iter().collect();
        let b: AHashSet<&str> = ["test", "string2"].into_iter().collect();
        assert_eq!(overlap.compare(&a, &b), 1.0);
        assert_eq!(overlap.distance(&a, &b), 0.0);
    }

    #[test]
    fn test_overlap_empty() {
        let overlap = OverlapCoefficient::new();
        let empty: AHashSet<&str> = AHashSet::new();
        let a: AHashSet<&str> = ["x"].into_iter().collect();
        assert_eq!(overlap.compare(&empty, &empty), 1.0);
        assert_eq!(overlap.compare(&a, &empty), 0.0);
        assert_eq!(overlap.compare(&empty, &a), 0.0);
    }
}
