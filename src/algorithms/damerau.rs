//! Damerau-Levenshtein distance implementation
//!
//! Extends Levenshtein with transposition of two adjacent characters.
//! Particularly useful for typo detection where letter swaps are common.
//!
//! This is the restricted variant, also known as optimal string alignment:
//! no substring is edited more than once, so "ca" → "abc" costs 3 rather
//! than 2.

use super::{Distance, Metric};
use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Configuration for weighted Damerau-Levenshtein distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamerauLevenshteinConfig {
    /// Cost of inserting or deleting a character (must be > 0)
    pub insert_delete: f64,
    /// Cost of substituting a character (must be >= 0)
    pub substitute: f64,
    /// Cost of swapping two adjacent characters (must be > 0)
    pub transpose: f64,
}

impl Default for DamerauLevenshteinConfig {
    fn default() -> Self {
        Self {
            insert_delete: 1.0,
            substitute: 1.0,
            transpose: 1.0,
        }
    }
}

/// Damerau-Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(n) using three rolling rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamerauLevenshtein {
    insert_delete: f64,
    substitute: f64,
    transpose: f64,
}

impl Default for DamerauLevenshtein {
    fn default() -> Self {
        Self {
            insert_delete: 1.0,
            substitute: 1.0,
            transpose: 1.0,
        }
    }
}

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_costs(insert_delete: f64, substitute: f64, transpose: f64) -> Result<Self> {
        if !insert_delete.is_finite() || insert_delete <= 0.0 {
            return Err(SimilarityError::invalid(format!(
                "insert/delete cost must be > 0, got {insert_delete}"
            )));
        }
        if !substitute.is_finite() || substitute < 0.0 {
            return Err(SimilarityError::invalid(format!(
                "substitute cost must be >= 0, got {substitute}"
            )));
        }
        if !transpose.is_finite() || transpose <= 0.0 {
            return Err(SimilarityError::invalid(format!(
                "transpose cost must be > 0, got {transpose}"
            )));
        }
        Ok(Self {
            insert_delete,
            substitute,
            transpose,
        })
    }

    pub fn from_config(config: DamerauLevenshteinConfig) -> Result<Self> {
        Self::with_costs(config.insert_delete, config.substitute, config.transpose)
    }

    #[must_use]
    pub fn config(&self) -> DamerauLevenshteinConfig {
        DamerauLevenshteinConfig {
            insert_delete: self.insert_delete,
            substitute: self.substitute,
            transpose: self.transpose,
        }
    }

    fn distance_chars(&self, a: &[char], b: &[char]) -> f64 {
        let m = a.len();
        let n = b.len();

        if m == 0 || n == 0 {
            return m.max(n) as f64 * self.insert_delete;
        }

        // Three rows: transpositions look back two rows
        let mut prev2_row: SmallVec<[f64; 64]> = smallvec::smallvec![0.0; n + 1];
        let mut prev_row: SmallVec<[f64; 64]> =
            (0..=n).map(|j| j as f64 * self.insert_delete).collect();
        let mut curr_row: SmallVec<[f64; 64]> = smallvec::smallvec![0.0; n + 1];

        for i in 1..=m {
            curr_row[0] = i as f64 * self.insert_delete;

            for j in 1..=n {
                let cost = if a[i - 1] == b[j - 1] {
                    0.0
                } else {
                    self.substitute
                };

                let mut cell = (prev_row[j] + self.insert_delete)
                    .min(curr_row[j - 1] + self.insert_delete)
                    .min(prev_row[j - 1] + cost);

                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    cell = cell.min(prev2_row[j - 2] + self.transpose);
                }

                curr_row[j] = cell;
            }

            std::mem::swap(&mut prev2_row, &mut prev_row);
            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        prev_row[n]
    }
}

impl Distance<str> for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 0.0;
        }
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        self.distance_chars(&a_chars, &b_chars)
    }
}

impl Metric<str> for DamerauLevenshtein {
    fn compare(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        if a_chars.is_empty() || b_chars.is_empty() {
            return 0.0;
        }

        let max_cost = self.insert_delete.max(self.substitute);
        let max_len = a_chars.len().max(b_chars.len()) as f64;
        1.0 - self.distance_chars(&a_chars, &b_chars) / (max_cost * max_len)
    }
}

/// Unit-cost optimal string alignment distance.
#[inline]
#[must_use]
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    // Unit costs keep every cell integral, so the cast is exact
    DamerauLevenshtein::default().distance(a, b) as usize
}
