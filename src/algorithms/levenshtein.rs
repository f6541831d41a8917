//! Levenshtein (edit) distance implementation
//!
//! Optimized with:
//! - Myers bit-parallel algorithm when insertions, deletions and
//!   substitutions share one cost
//! - Two-row weighted DP for every other cost combination
//! - Unicode-aware character handling (lengths count `char`s)

use super::{Distance, Metric};
use crate::error::{Result, SimilarityError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Maximum pattern length for Myers bit-parallel algorithm (64 bits per block)
const MYERS_BLOCK_SIZE: usize = 64;

// ============================================================================
// Myers Bit-Parallel Algorithm
// ============================================================================

/// Myers bit-parallel unit edit distance for patterns up to 64 characters.
///
/// Runs in O(n) for a pattern that fits in a single 64-bit word and falls
/// back to [`unit_dp_distance`] for longer patterns.
///
/// Based on: Myers, G. (1999). "A fast bit-vector algorithm for approximate string matching"
#[inline]
fn myers_64(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }
    if m > MYERS_BLOCK_SIZE {
        return unit_dp_distance(pattern, text);
    }

    // peq[c] has bit i set when pattern[i] == c
    let mut peq: AHashMap<char, u64> = AHashMap::with_capacity(m.min(26));
    for (i, &c) in pattern.iter().enumerate() {
        *peq.entry(c).or_insert(0) |= 1u64 << i;
    }

    let mut vp: u64 = !0u64;
    let mut vn: u64 = 0u64;
    let mut score = m;
    let mask = 1u64 << (m - 1);

    for &tc in text {
        let eq = peq.get(&tc).copied().unwrap_or(0);

        let xv = eq | vn;
        let xh = (((eq & vp).wrapping_add(vp)) ^ vp) | eq;

        let hp = vn | !(xh | vp);
        let hn = vp & xh;

        if (hp & mask) != 0 {
            score += 1;
        } else if (hn & mask) != 0 {
            score -= 1;
        }

        // Row 0 always increases by one, hence the shifted-in 1
        let hp_shifted = (hp << 1) | 1;
        let hn_shifted = hn << 1;

        vp = hn_shifted | !(xv | hp_shifted);
        vn = hp_shifted & xv;
    }

    score
}

/// Single-row unit-cost DP (fallback for patterns longer than 64 chars)
#[inline]
fn unit_dp_distance(a: &[char], b: &[char]) -> usize {
    // Shorter string on the column axis
    let (target, source) = if a.len() < b.len() { (a, b) } else { (b, a) };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for j in 0..n_target {
            let cost = usize::from(sc != target[j]);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = prev + cost;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}

/// Unit edit distance between two char slices.
#[inline]
pub(crate) fn unit_distance(a: &[char], b: &[char]) -> usize {
    // Myers is O(⌈m/64⌉n), so the shorter string is the pattern
    if a.len() <= b.len() {
        myers_64(a, b)
    } else {
        myers_64(b, a)
    }
}

// ============================================================================
// Weighted DP
// ============================================================================

/// Two-row weighted edit distance.
fn weighted_distance(a: &[char], b: &[char], insert_delete: f64, substitute: f64) -> f64 {
    let n = b.len();

    let mut prev: SmallVec<[f64; 64]> = (0..=n).map(|j| j as f64 * insert_delete).collect();
    let mut curr: SmallVec<[f64; 64]> = SmallVec::from_elem(0.0, n + 1);

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = (i + 1) as f64 * insert_delete;

        for j in 0..n {
            let cost = if ac == b[j] { 0.0 } else { substitute };
            curr[j + 1] = (prev[j + 1] + insert_delete)
                .min(curr[j] + insert_delete)
                .min(prev[j] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

// ============================================================================
// Public API
// ============================================================================

/// Configuration for weighted Levenshtein distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevenshteinConfig {
    /// Cost of inserting or deleting a character (must be > 0)
    pub insert_delete: f64,
    /// Cost of substituting a character (must be >= 0)
    pub substitute: f64,
}

impl Default for LevenshteinConfig {
    fn default() -> Self {
        Self {
            insert_delete: 1.0,
            substitute: 1.0,
        }
    }
}

/// Levenshtein distance calculator with configurable operation costs
///
/// `compare` normalizes the distance by `max(insert_delete, substitute)`
/// times the longer length. Costs where substitution is far cheaper than
/// an insertion can push raw distances past that bound; keeping the
/// weights consistent is up to the caller.
///
/// # Complexity
/// - Time: O(m*n), O(n) per 64-char block in the unit-cost case
/// - Space: O(min(m,n)) with rolling rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levenshtein {
    insert_delete: f64,
    substitute: f64,
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self {
            insert_delete: 1.0,
            substitute: 1.0,
        }
    }
}

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom operation costs.
    ///
    /// Fails when `insert_delete <= 0`, `substitute < 0`, or either is not finite.
    pub fn with_costs(insert_delete: f64, substitute: f64) -> Result<Self> {
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
        Ok(Self {
            insert_delete,
            substitute,
        })
    }

    pub fn from_config(config: LevenshteinConfig) -> Result<Self> {
        Self::with_costs(config.insert_delete, config.substitute)
    }

    #[must_use]
    pub fn config(&self) -> LevenshteinConfig {
        LevenshteinConfig {
            insert_delete: self.insert_delete,
            substitute: self.substitute,
        }
    }

    fn distance_chars(&self, a: &[char], b: &[char]) -> f64 {
        if a == b {
            return 0.0;
        }
        if a.is_empty() || b.is_empty() {
            return a.len().max(b.len()) as f64 * self.insert_delete;
        }

        if self.insert_delete == self.substitute {
            unit_distance(a, b) as f64 * self.insert_delete
        } else {
            weighted_distance(a, b, self.insert_delete, self.substitute)
        }
    }
}

impl Distance<str> for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 0.0;
        }
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        self.distance_chars(&a_chars, &b_chars)
    }
}

impl Metric<str> for Levenshtein {
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

/// Convenience function for unit-cost distance calculation
///
/// # Example
/// ```
/// use fuzzymetrics::algorithms::levenshtein::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    unit_distance(&a_chars, &b_chars)
}

/// Convenience function for normalized unit-cost similarity (0.0 to 1.0)
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    Levenshtein::default().compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
    }

    #[test]
    fn test_myers_algorithm() {
        assert_eq!(levenshtein("algorithm", "altruistic"), 6);
        assert_eq!(levenshtein("intention", "execution"), 5);
        assert_eq!(levenshtein("a", "b"), 1);
        assert_eq!(levenshtein("ab", "ba"), 2);
    }

    #[test]
    fn test_long_strings_fall_back_to_dp() {
        let a = "a".repeat(100);
        let b = format!("{}b", "a".repeat(99));
        assert_eq!(levenshtein(&a, &b), 1);

        let a: Vec<char> = "x".repeat(70).chars().collect();
        let b: Vec<char> = "y".repeat(80).chars().collect();
        assert_eq!(unit_distance(&a, &b), unit_dp_distance(&a, &b));
        assert_eq!(unit_distance(&a, &b), 80);
    }

    #[test]
    fn test_distance_and_compare() {
        let lev = Levenshtein::new();
        assert_eq!(lev.distance("test", "test string2"), 8.0);
        assert_eq!(lev.distance("test string1", "test string2"), 1.0);
        assert!(approx_eq(lev.compare("test string1", "test string2"), 0.9167));
        assert!(approx_eq(lev.compare("test", "test string2"), 0.3333));
    }

    #[test]
    fn test_empty_inputs() {
        let lev = Levenshtein::with_costs(1.0, 1.0).unwrap();
        assert_eq!(lev.compare("", ""), 1.0);
        assert_eq!(lev.compare("abc", ""), 0.0);
        assert_eq!(lev.compare("", "abc"), 0.0);
        assert_eq!(lev.distance("", ""), 0.0);

        let weighted = Levenshtein::with_costs(2.0, 1.0).unwrap();
        assert_eq!(weighted.distance("abc", ""), 6.0);
    }

    #[test]
    fn test_weighted_costs() {
        // Substitution priced above an insert plus a delete is never chosen
        let lev = Levenshtein::with_costs(1.0, 3.0).unwrap();
        assert_eq!(lev.distance("abc", "abd"), 2.0);

        // Free substitution degenerates to a length difference
        let lev = Levenshtein::with_costs(1.0, 0.0).unwrap();
        assert_eq!(lev.distance("abc", "xyz"), 0.0);
        assert_eq!(lev.distance("abc", "xyzw"), 1.0);

        let lev = Levenshtein::with_costs(0.5, 1.0).unwrap();
        assert!(approx_eq(lev.distance("kitten", "sitting"), 2.5));
    }

    #[test]
    fn test_invalid_costs() {
        assert!(Levenshtein::with_costs(0.0, 1.0).is_err());
        assert!(Levenshtein::with_costs(1.0, -1.0).is_err());
        assert!(Levenshtein::with_costs(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let json = r#"{"insert_delete": 2.0}"#;
        let config: LevenshteinConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.substitute, 1.0);

        let lev = Levenshtein::from_config(config).unwrap();
        assert_eq!(lev.config(), config);
        assert_eq!(lev.distance("a", ""), 2.0);
    }
}
