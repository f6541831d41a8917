//! Block (Manhattan, L1) distance between token-frequency vectors
//!
//! `distance = Σ |aₜ - bₜ|`, bounded by `|a| + |b|`, which `compare` uses
//! to normalize. Combined with padded q-gram tokenization this is the
//! classic q-gram distance.

use std::hash::Hash;

use super::jaccard::min_overlap;
use super::{empty_aware, Distance, Metric};
use crate::multiset::Multiset;

/// Block distance over token counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockDistance;

impl BlockDistance {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Σ|aₜ - bₜ| computed as |a| + |b| - 2Σmin(aₜ, bₜ).
fn l1<T: Hash + Eq>(a: &Multiset<T>, b: &Multiset<T>) -> usize {
    a.len() + b.len() - 2 * min_overlap(a, b)
}

impl<T: Hash + Eq> Metric<Multiset<T>> for BlockDistance {
    fn compare(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        empty_aware(a.is_empty(), b.is_empty(), || {
            1.0 - l1(a, b) as f64 / (a.len() + b.len()) as f64
        })
    }
}

impl<T: Hash + Eq> Distance<Multiset<T>> for BlockDistance {
    fn distance(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        l1(a, b) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(s: &str) -> Multiset<char> {
        s.chars().collect()
    }

    #[test]
    fn test_block_distance() {
        let block = BlockDistance::new();
        assert_eq!(block.distance(&bag(""), &bag("")), 0.0);
        assert_eq!(block.distance(&bag("abc"), &bag("")), 3.0);
        assert_eq!(block.distance(&bag("aab"), &bag("abb")), 2.0);
        assert_eq!(block.distance(&bag("abc"), &bag("cba")), 0.0);
    }

    #[test]
    fn test_block_compare() {
        let block = BlockDistance::new();
        assert_eq!(block.compare(&bag(""), &bag("")), 1.0);
        assert_eq!(block.compare(&bag("abc"), &bag("")), 0.0);
        assert_eq!(block.compare(&bag("abc"), &bag("xyz")), 0.0);
        assert!((block.compare(&bag("aab"), &bag("abb")) - 2.0 / 3.0).abs() < 1e-9);
    }
}
