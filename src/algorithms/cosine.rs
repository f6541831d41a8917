//! Cosine similarity implementation
//!
//! Treats token multisets as term-frequency vectors and computes the
//! cosine of the angle between them.
//!
//! # Complexity
//! - Time: O(m+n) over the distinct tokens
//! - Space: O(1) beyond the inputs

use std::hash::Hash;

use super::{empty_aware, Distance, Metric};
use crate::multiset::Multiset;

/// Cosine similarity over token multisets
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CosineSimilarity;

impl CosineSimilarity {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Calculate cosine similarity between two frequency vectors.
fn cosine_from_counts<T: Hash + Eq>(a: &Multiset<T>, b: &Multiset<T>) -> f64 {
    let mut dot_product = 0.0f64;
    let mut magnitude_a = 0.0f64;

    for (token, count_a) in a.iter() {
        let count_a = count_a as f64;
        magnitude_a += count_a * count_a;
        dot_product += count_a * b.count(token) as f64;
    }

    let magnitude_b: f64 = b
        .iter()
        .map(|(_, count)| (count * count) as f64)
        .sum();

    let magnitude = (magnitude_a * magnitude_b).sqrt();
    if magnitude == 0.0 {
        0.0
    } else {
        // Rounding can nudge identical vectors just past 1.0
        (dot_product / magnitude).min(1.0)
    }
}

impl<T: Hash + Eq> Metric<Multiset<T>> for CosineSimilarity {
    fn compare(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        empty_aware(a.is_empty(), b.is_empty(), || cosine_from_counts(a, b))
    }
}

impl<T: Hash + Eq> Distance<Multiset<T>> for CosineSimilarity {
    fn distance(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        1.0 - self.compare(a, b)
    }
}
