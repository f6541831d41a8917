//! Smith-Waterman local alignment
//!
//! Two flavours:
//! - [`SmithWatermanGotoh`] uses the three-state affine recurrence and runs
//!   in O(m*n) time and O(n) space. Its gap must be an [`AffineCost`].
//! - [`SmithWaterman`] accepts any [`Gap`] function, searching every gap
//!   run up to `window_size` long. O(m*n*(m+n)) time and O(m*n) space,
//!   so prefer the Gotoh variant unless the gap function is not affine.
//!
//! Both normalize the best local score by the best score the shorter input
//! could reach against itself: `score / (min(|a|, |b|) * substitution.max())`.

use super::costs::{AffineCost, AffineGap, Gap, LinearGap, MatchMismatch, Substitution};
use super::needleman_wunsch::affine_alignment;
use super::{Distance, Metric};
use crate::error::{Result, SimilarityError};
use smallvec::SmallVec;

fn check_substitution<S: Substitution>(substitution: &S) -> Result<()> {
    if !(substitution.max() > 0.0) {
        return Err(SimilarityError::invalid(format!(
            "substitution max must be positive, got {}",
            substitution.max()
        )));
    }
    Ok(())
}

fn normalize(score: f64, a_len: usize, b_len: usize, max_substitution: f64) -> f64 {
    let best = a_len.min(b_len) as f64 * max_substitution;
    (score / best).clamp(0.0, 1.0)
}

// ============================================================================
// Smith-Waterman-Gotoh
// ============================================================================

/// Smith-Waterman-Gotoh similarity
///
/// # Example
/// ```
/// use fuzzymetrics::algorithms::{Metric, SmithWatermanGotoh};
///
/// let swg = SmithWatermanGotoh::new();
/// // "string" aligns perfectly, normalized by the 7-char shorter input
/// let sim = swg.compare("string1", "string2");
/// assert!((sim - 6.0 / 7.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmithWatermanGotoh<G = LinearGap, S = MatchMismatch> {
    gap: G,
    substitution: S,
}

impl SmithWatermanGotoh {
    /// Linear gap of -0.5 and match/mismatch of 1/-2.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gap: LinearGap { value: -0.5 },
            substitution: MatchMismatch {
                match_value: 1.0,
                mismatch_value: -2.0,
            },
        }
    }
}

impl Default for SmithWatermanGotoh {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: AffineCost, S: Substitution> SmithWatermanGotoh<G, S> {
    pub fn with_costs(gap: G, substitution: S) -> Result<Self> {
        check_substitution(&substitution)?;
        Ok(Self { gap, substitution })
    }

    /// Raw best local alignment score.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        self.score_chars(&a_chars, &b_chars)
    }

    fn score_chars(&self, a: &[char], b: &[char]) -> f64 {
        affine_alignment(
            a,
            b,
            self.gap.open(),
            self.gap.extend(),
            &self.substitution,
            true,
        )
    }
}

impl<G: AffineCost, S: Substitution> Metric<str> for SmithWatermanGotoh<G, S> {
    fn compare(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        normalize(
            self.score_chars(&a_chars, &b_chars),
            a_chars.len(),
            b_chars.len(),
            self.substitution.max(),
        )
    }
}

impl<G: AffineCost, S: Substitution> Distance<str> for SmithWatermanGotoh<G, S> {
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.compare(a, b)
    }
}

// ============================================================================
// Smith-Waterman with arbitrary gaps
// ============================================================================

/// Smith-Waterman similarity with an arbitrary gap function
///
/// A gap run is only considered up to `window_size` positions long, which
/// bounds the per-cell work for long inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmithWaterman<G = AffineGap, S = MatchMismatch> {
    gap: G,
    substitution: S,
    window_size: usize,
}

impl SmithWaterman {
    /// Affine gap of -5/-1, match/mismatch of 5/-3 and an unbounded window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gap: AffineGap {
                open: -5.0,
                extend: -1.0,
            },
            substitution: MatchMismatch {
                match_value: 5.0,
                mismatch_value: -3.0,
            },
            window_size: usize::MAX,
        }
    }
}

impl Default for SmithWaterman {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Gap, S: Substitution> SmithWaterman<G, S> {
    pub fn with_costs(gap: G, substitution: S, window_size: usize) -> Result<Self> {
        check_substitution(&substitution)?;
        if window_size == 0 {
            return Err(SimilarityError::invalid("window size must be positive"));
        }
        Ok(Self {
            gap,
            substitution,
            window_size,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    fn score_chars(&self, a: &[char], b: &[char]) -> f64 {
        let m = a.len();
        let n = b.len();
        let width = n + 1;

        // Row and column zero stay at 0 for local alignment
        let mut d = vec![0.0f64; (m + 1) * width];
        let mut best = 0.0f64;

        for i in 1..=m {
            for j in 1..=n {
                let mut cell = d[(i - 1) * width + (j - 1)]
                    + self.substitution.compare(a, i - 1, b, j - 1);

                for k in i.saturating_sub(self.window_size).max(1)..i {
                    cell = cell.max(d[k * width + j] + self.gap.value(k, i));
                }
                for l in j.saturating_sub(self.window_size).max(1)..j {
                    cell = cell.max(d[i * width + l] + self.gap.value(l, j));
                }

                let cell = cell.max(0.0);
                d[i * width + j] = cell;
                best = best.max(cell);
            }
        }

        best
    }
}

impl<G: Gap, S: Substitution> Metric<str> for SmithWaterman<G, S> {
    fn compare(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        normalize(
            self.score_chars(&a_chars, &b_chars),
            a_chars.len(),
            b_chars.len(),
            self.substitution.max(),
        )
    }
}

impl<G: Gap, S: Substitution> Distance<str> for SmithWaterman<G, S> {
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.compare(a, b)
    }
}
