//! Sørensen-Dice coefficient over sets, and its multiset form (Simon White)
//!
//! - [`Dice`]: `2|a ∩ b| / (|a| + |b|)` over sets
//! - [`SimonWhite`]: `2 Σ min(aₜ, bₜ) / (|a| + |b|)` over token counts.
//!   Combined with whitespace-then-bigram tokenization this is Simon White's
//!   "strike a match" similarity.

use std::hash::Hash;

use ahash::AHashSet;

use super::jaccard::{intersection_len, min_overlap};
use super::{empty_aware, Distance, Metric};
use crate::multiset::Multiset;

/// Dice coefficient over sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dice;

impl Dice {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Hash + Eq> Metric<AHashSet<T>> for Dice {
    fn compare(&self, a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
        empty_aware(a.is_empty(), b.is_empty(), || {
            2.0 * intersection_len(a, b) as f64 / (a.len() + b.len()) as f64
        })
    }
}

impl<T: Hash + Eq> Distance<AHashSet<T>> for Dice {
    fn distance(&self, a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
        1.0 - self.compare(a, b)
    }
}

/// Dice coefficient over token counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimonWhite;

impl SimonWhite {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Hash + Eq> Metric<Multiset<T>> for SimonWhite {
    fn compare(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        empty_aware(a.is_empty(), b.is_empty(), || {
            2.0 * min_overlap(a, b) as f64 / (a.len() + b.len()) as f64
        })
    }
}

impl<T: Hash + Eq> Distance<Multiset<T>> for SimonWhite {
    fn distance(&self, a: &Multiset<T>, b: &Multiset<T>) -> f64 {
        1.0 - self.compare(a, b)
    }
}
