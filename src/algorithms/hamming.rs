//! Hamming distance implementation
//!
//! Counts positions where characters differ.
//!
//! # Length Mismatch Behavior
//!
//! Hamming distance is only defined for strings of equal length:
//!
//! - [`Hamming::try_distance`] / [`Hamming::try_compare`] return
//!   `InvalidArgument` for unequal lengths.
//! - The [`Metric`] and [`Distance`] impls are total and treat every
//!   position past the end of the shorter string as a mismatch, so they can
//!   be used in pipelines where lengths are not known up front.
//!
//! # Complexity
//! - Time: O(n) where n is the string length
//! - Space: O(1)

use super::{Distance, Metric};
use crate::error::{Result, SimilarityError};

/// Hamming distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Strict distance; fails for strings of different lengths.
    ///
    /// ```
    /// use fuzzymetrics::algorithms::Hamming;
    ///
    /// let h = Hamming::new();
    /// assert_eq!(h.try_distance("abc", "xyz").unwrap(), 3.0);
    /// assert!(h.try_distance("abc", "xy").is_err());
    /// ```
    pub fn try_distance(&self, a: &str, b: &str) -> Result<f64> {
        hamming_distance(a, b)
            .map(|d| d as f64)
            .ok_or_else(|| unequal_lengths(a, b))
    }

    /// Strict similarity; fails for strings of different lengths.
    pub fn try_compare(&self, a: &str, b: &str) -> Result<f64> {
        hamming_similarity(a, b).ok_or_else(|| unequal_lengths(a, b))
    }
}

fn unequal_lengths(a: &str, b: &str) -> SimilarityError {
    SimilarityError::invalid(format!(
        "hamming distance requires equal lengths, got {} and {}",
        a.chars().count(),
        b.chars().count()
    ))
}

impl Distance<str> for Hamming {
    fn distance(&self, a: &str, b: &str) -> f64 {
        hamming_distance_padded(a, b) as f64
    }
}

impl Metric<str> for Hamming {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let len = a.chars().count().max(b.chars().count());
        if len == 0 {
            return 1.0;
        }
        1.0 - hamming_distance_padded(a, b) as f64 / len as f64
    }
}

/// Calculate Hamming distance between two strings.
/// Returns None if strings have different lengths.
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    if a.chars().count() != b.chars().count() {
        return None;
    }

    Some(a.chars().zip(b.chars()).filter(|(ac, bc)| ac != bc).count())
}

/// Hamming distance where positions past the shorter string count as mismatches.
#[must_use]
pub fn hamming_distance_padded(a: &str, b: &str) -> usize {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    let mut distance = 0;

    loop {
        match (a_chars.next(), b_chars.next()) {
            (None, None) => return distance,
            (Some(ac), Some(bc)) if ac == bc => {}
            _ => distance += 1,
        }
    }
}

/// Normalized Hamming similarity (0.0 to 1.0)
/// Returns None for strings of different lengths.
#[must_use]
pub fn hamming_similarity(a: &str, b: &str) -> Option<f64> {
    let dist = hamming_distance(a, b)?;
    let len = a.chars().count();

    if len == 0 {
        Some(1.0)
    } else {
        Some(1.0 - (dist as f64 / len as f64))
    }
}
