//! Core similarity and distance algorithms
//!
//! Each algorithm is a small immutable struct implementing [`Metric`] and,
//! where meaningful, [`Distance`] over strings, token lists, sets or
//! multisets. Unit-cost helpers are also exposed as standalone functions.

use std::sync::Arc;

pub mod costs;

pub mod levenshtein;
pub mod damerau;
pub mod needleman_wunsch;
pub mod smith_waterman;
pub mod lcs;
pub mod hamming;
pub mod jaro;

pub mod cosine;
pub mod jaccard;
pub mod dice;
pub mod overlap;
pub mod block;
pub mod euclidean;
pub mod identity;

pub mod level2;

pub use costs::*;
pub use levenshtein::*;
pub use damerau::*;
pub use needleman_wunsch::*;
pub use smith_waterman::*;
pub use lcs::*;
pub use hamming::*;
pub use jaro::*;
pub use cosine::*;
pub use jaccard::*;
pub use dice::*;
pub use overlap::*;
pub use block::*;
pub use euclidean::*;
pub use identity::*;
pub use level2::*;

/// Trait for all similarity metrics.
///
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
/// Two empty inputs compare as 1.0; exactly one empty input compares as 0.0.
pub trait Metric<T: ?Sized>: Send + Sync {
    fn compare(&self, a: &T, b: &T) -> f64;
}

/// Trait for non-negative distance functions.
///
/// A distance of 0.0 means the inputs are identical under the measure.
/// Not every distance has an upper bound.
pub trait Distance<T: ?Sized>: Send + Sync {
    fn distance(&self, a: &T, b: &T) -> f64;
}

impl<T: ?Sized, M: Metric<T> + ?Sized> Metric<T> for Arc<M> {
    fn compare(&self, a: &T, b: &T) -> f64 {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, M: Metric<T> + ?Sized> Metric<T> for Box<M> {
    fn compare(&self, a: &T, b: &T) -> f64 {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, M: Metric<T> + ?Sized> Metric<T> for &M {
    fn compare(&self, a: &T, b: &T) -> f64 {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, D: Distance<T> + ?Sized> Distance<T> for Arc<D> {
    fn distance(&self, a: &T, b: &T) -> f64 {
        (**self).distance(a, b)
    }
}

impl<T: ?Sized, D: Distance<T> + ?Sized> Distance<T> for Box<D> {
    fn distance(&self, a: &T, b: &T) -> f64 {
        (**self).distance(a, b)
    }
}

impl<T: ?Sized, D: Distance<T> + ?Sized> Distance<T> for &D {
    fn distance(&self, a: &T, b: &T) -> f64 {
        (**self).distance(a, b)
    }
}

/// Similarity from a size-normalized difference, shared by the set metrics.
///
/// Both empty compares as identical; exactly one empty compares as 0.0.
#[inline]
pub(crate) fn empty_aware(a_empty: bool, b_empty: bool, score: impl FnOnce() -> f64) -> f64 {
    match (a_empty, b_empty) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => score(),
    }
}

