//! Longest Common Subsequence and Substring
//!
//! Finds the longest subsequence (gaps allowed) or substring (contiguous)
//! present in both strings.
//!
//! Both metrics use the same fixed formulas:
//! - `compare = length / max(|a|, |b|)`
//! - `distance = |a| + |b| - 2 * length`
//!
//! For subsequences the distance is the insert/delete edit distance.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(n) with two rolling rows

use super::{Distance, Metric};
use smallvec::{smallvec, SmallVec};

fn subsequence_chars(a: &[char], b: &[char]) -> usize {
    let n = b.len();
    if a.is_empty() || n == 0 {
        return 0;
    }

    let mut prev: SmallVec<[usize; 64]> = smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec![0; n + 1];

    for &ac in a {
        for j in 1..=n {
            curr[j] = if ac == b[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

fn substring_chars(a: &[char], b: &[char]) -> usize {
    let n = b.len();
    if a.is_empty() || n == 0 {
        return 0;
    }

    let mut prev: SmallVec<[usize; 64]> = smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec![0; n + 1];
    let mut longest = 0;

    for &ac in a {
        for j in 1..=n {
            // Run resets on mismatch
            curr[j] = if ac == b[j - 1] { prev[j - 1] + 1 } else { 0 };
            longest = longest.max(curr[j]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    longest
}

/// Calculate the length of the Longest Common Subsequence.
#[must_use]
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    subsequence_chars(&a_chars, &b_chars)
}

/// Longest Common Substring (contiguous, not subsequence)
#[must_use]
pub fn longest_common_substring_length(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    substring_chars(&a_chars, &b_chars)
}

fn length_similarity(a: &str, b: &str, common: fn(&[char], &[char]) -> usize) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }
    common(&a_chars, &b_chars) as f64 / a_chars.len().max(b_chars.len()) as f64
}

fn length_distance(a: &str, b: &str, common: fn(&[char], &[char]) -> usize) -> f64 {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    let common = common(&a_chars, &b_chars);
    (a_chars.len() + b_chars.len() - 2 * common) as f64
}

/// Longest common subsequence similarity and distance
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestCommonSubsequence;

impl LongestCommonSubsequence {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Metric<str> for LongestCommonSubsequence {
    fn compare(&self, a: &str, b: &str) -> f64 {
        length_similarity(a, b, subsequence_chars)
    }
}

impl Distance<str> for LongestCommonSubsequence {
    fn distance(&self, a: &str, b: &str) -> f64 {
        length_distance(a, b, subsequence_chars)
    }
}

/// Longest common substring similarity and distance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestCommonSubstring;

impl LongestCommonSubstring {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Metric<str> for LongestCommonSubstring {
    fn compare(&self, a: &str, b: &str) -> f64 {
        length_similarity(a, b, substring_chars)
    }
}

impl Distance<str> for LongestCommonSubstring {
    fn distance(&self, a: &str, b: &str) -> f64 {
        length_distance(a, b, substring_chars)
    }
}
