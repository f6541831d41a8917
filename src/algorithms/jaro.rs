//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! ASCII inputs are compared byte-wise, which avoids collecting `char`s
//! for the common case.

use super::{Distance, Metric};
use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

// ============================================================================
// Core algorithm
// ============================================================================

/// Jaro similarity over any comparable slices. Both slices must be non-empty.
fn jaro_slices<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    let match_distance = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec![false; b_len];
    let mut matches = 0usize;

    for i in 0..a_len {
        let start = i.saturating_sub(match_distance);
        let end = (i + match_distance + 1).min(b_len);

        for j in start..end {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Matched characters of `a` and `b` in order, counting mismatched pairs
    let b_in_order = b.iter().zip(&b_matched).filter(|&(_, &m)| m).map(|(c, _)| c);
    let half_transpositions = a
        .iter()
        .zip(&a_matched)
        .filter(|&(_, &m)| m)
        .map(|(c, _)| c)
        .zip(b_in_order)
        .filter(|(ac, bc)| ac != bc)
        .count();

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;
    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

/// Calculate Jaro similarity between two strings.
/// Returns a value between 0.0 and 1.0.
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a.is_ascii() && b.is_ascii() {
        return jaro_slices(a.as_bytes(), b.as_bytes());
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    jaro_slices(&a_chars, &b_chars)
}

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*n) for matching characters
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Metric<str> for Jaro {
    fn compare(&self, a: &str, b: &str) -> f64 {
        jaro_similarity(a, b)
    }
}

impl Distance<str> for Jaro {
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - jaro_similarity(a, b)
    }
}

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerConfig {
    /// Jaro score a pair must reach before the prefix boost applies
    pub boost_threshold: f64,
    /// Prefix weight (typically 0.1, max 0.25)
    pub prefix_weight: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            boost_threshold: 0.7,
            prefix_weight: 0.1,
            max_prefix_length: 4,
        }
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by giving extra weight to common prefixes.
/// Best for names and short identifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    config: JaroWinklerConfig,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            config: JaroWinklerConfig::default(),
        }
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration
    ///
    /// `prefix_weight * max_prefix_length` must not exceed 1.0, otherwise
    /// the boosted score could leave `[0, 1]`.
    pub fn from_config(config: JaroWinklerConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.boost_threshold) {
            return Err(SimilarityError::invalid(format!(
                "boost threshold must be in [0, 1], got {}",
                config.boost_threshold
            )));
        }
        if !(config.prefix_weight >= 0.0
            && config.prefix_weight * config.max_prefix_length as f64 <= 1.0)
        {
            return Err(SimilarityError::invalid(format!(
                "prefix weight {} over {} characters leaves [0, 1]",
                config.prefix_weight, config.max_prefix_length
            )));
        }
        Ok(Self { config })
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        self.config
    }
}

impl Metric<str> for JaroWinkler {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let jaro = jaro_similarity(a, b);
        if jaro < self.config.boost_threshold {
            return jaro;
        }

        let prefix_len = a
            .chars()
            .zip(b.chars())
            .take(self.config.max_prefix_length)
            .take_while(|(ac, bc)| ac == bc)
            .count();

        jaro + prefix_len as f64 * self.config.prefix_weight * (1.0 - jaro)
    }
}

impl Distance<str> for JaroWinkler {
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.compare(a, b)
    }
}

/// Calculate Jaro-Winkler similarity with default parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    JaroWinkler::default().compare(a, b)
}
