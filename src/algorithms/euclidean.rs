//! Euclidean (L2) distance between token-frequency vectors
//!
//! `distance = sqrt(Σ (aₜ - bₜ)²)`. The largest possible distance for two
//! multisets of these sizes is `sqrt(|a|² + |b|²)`, which `compare` uses
//! to normalize.

use std::hash::Hash;

use super::{empty_aware, Distance, Metric};
use crate::multiset::Multiset;

/// Euclidean distance over token counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EuclideanDistance;

impl EuclideanDistance {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn l2<T: Hash + Eq>(a: &Multiset<T>, b: &Multiset<T>) -> f64 {
    let mut sum = 0.0f64;

    for (token, count_a) in a.iter() {
        let diff = count_a as f64 - b.count(token) as f64;
        sum += diff * diff;
    }
    // Tokens only in `b`
    for (token, count_b) in b.iter() {
        if !a.contains(token) {
            let count_b = count_b as f64;
            sum += count_b * count_b;
        }
    }

    sum.sqrt()
}

impl<T: Hash + Eq> Metric<Multiset<T>> for EuclideanDistance {
    fn compare(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        empty_aware(a.is_empty(), b.is_empty(), || {
            let a_len = a.len() as f64;
            let b_len = b.len() as f64;
            let max_distance = (a_len * a_len + b_len * b_len).sqrt();
            1.0 - l2(a, b) / max_distance
        })
    }
}

impl<T: Hash + Eq> Distance<Multiset<T>> for EuclideanDistance {
    fn distance(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        l2(a, b)
    }
}
