//! Needleman-Wunsch global alignment with affine gaps
//!
//! Scores are computed with Gotoh's three-state recurrence: for every cell
//! the best alignment ending in a substitution, in a gap in `b`, and in a
//! gap in `a` are tracked separately. Opening and extending a gap are
//! priced from an [`AffineCost`] gap, so a run of `k` gap positions costs
//! `open + extend * (k - 1)` instead of `k` independent gaps.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(n) with rolling rows

use super::costs::{AffineCost, LinearGap, MatchMismatch, Substitution};
use super::{Distance, Metric};
use crate::error::{Result, SimilarityError};
use smallvec::{smallvec, SmallVec};

/// Three-state affine alignment score shared by the global and local aligners.
///
/// With `local` set, scores are clamped at zero and the best cell anywhere
/// in the matrix is returned (Smith-Waterman-Gotoh). Otherwise the score of
/// the full alignment is returned (Needleman-Wunsch-Gotoh).
pub(crate) fn affine_alignment<S: Substitution + ?Sized>(
    a: &[char],
    b: &[char],
    open: f64,
    extend: f64,
    substitution: &S,
    local: bool,
) -> f64 {
    let n = b.len();
    let floor = if local { 0.0 } else { f64::NEG_INFINITY };
    let leading_gap = |len: usize| {
        if local || len == 0 {
            0.0
        } else {
            open + (len - 1) as f64 * extend
        }
    };

    // h: best score ending at the cell, x: best score ending in a gap in `b`
    let mut prev_h: SmallVec<[f64; 64]> = (0..=n).map(leading_gap).collect();
    let mut prev_x: SmallVec<[f64; 64]> = smallvec![f64::NEG_INFINITY; n + 1];
    let mut curr_h: SmallVec<[f64; 64]> = smallvec![0.0; n + 1];
    let mut curr_x: SmallVec<[f64; 64]> = smallvec![f64::NEG_INFINITY; n + 1];

    let mut best = 0.0f64;

    for i in 1..=a.len() {
        curr_h[0] = leading_gap(i);
        // y: best score ending in a gap in `a`, carried along the row
        let mut y = f64::NEG_INFINITY;

        for j in 1..=n {
            let diagonal = prev_h[j - 1] + substitution.compare(a, i - 1, b, j - 1);
            let x = (prev_h[j] + open).max(prev_x[j] + extend);
            y = (curr_h[j - 1] + open).max(y + extend);

            let h = diagonal.max(x).max(y).max(floor);
            curr_h[j] = h;
            curr_x[j] = x;

            if local {
                best = best.max(h);
            }
        }

        std::mem::swap(&mut prev_h, &mut curr_h);
        std::mem::swap(&mut prev_x, &mut curr_x);
    }

    if local {
        best
    } else {
        prev_h[n]
    }
}

/// Needleman-Wunsch similarity and distance
///
/// `compare` maps the raw alignment score onto `[0, 1]` by placing it
/// between the lowest and highest score any alignment of the longer length
/// `L` could reach:
///
/// ```text
/// (score - L * lo) / (L * hi - L * lo)
/// hi = substitution.max()
/// lo = min(substitution.min(), gap open, gap extend)
/// ```
///
/// `distance` is the unbounded shortfall `L * hi - score`.
///
/// # Example
/// ```
/// use fuzzymetrics::algorithms::{Metric, NeedlemanWunsch};
///
/// let nw = NeedlemanWunsch::new();
/// assert_eq!(nw.compare("kitten", "kitten"), 1.0);
/// assert!(nw.compare("kitten", "sitting") < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedlemanWunsch<G = LinearGap, S = MatchMismatch> {
    gap: G,
    substitution: S,
}

impl NeedlemanWunsch {
    /// Linear gap of -2 and match/mismatch of 1/-1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gap: LinearGap { value: -2.0 },
            substitution: MatchMismatch {
                match_value: 1.0,
                mismatch_value: -1.0,
            },
        }
    }
}

impl Default for NeedlemanWunsch {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: AffineCost, S: Substitution> NeedlemanWunsch<G, S> {
    /// Fails unless `substitution.max()` is positive and above `substitution.min()`.
    pub fn with_costs(gap: G, substitution: S) -> Result<Self> {
        if !(substitution.max() > 0.0 && substitution.max() > substitution.min()) {
            return Err(SimilarityError::invalid(format!(
                "substitution max ({}) must be positive and above its min ({})",
                substitution.max(),
                substitution.min()
            )));
        }
        if !(gap.open() <= 0.0 && gap.extend() <= 0.0) {
            return Err(SimilarityError::invalid("gap open and extend values must be <= 0"));
        }
        Ok(Self { gap, substitution })
    }

    pub fn gap(&self) -> &G {
        &self.gap
    }

    pub fn substitution(&self) -> &S {
        &self.substitution
    }

    fn score(&self, a: &[char], b: &[char]) -> f64 {
        affine_alignment(
            a,
            b,
            self.gap.open(),
            self.gap.extend(),
            &self.substitution,
            false,
        )
    }

    fn lowest_column(&self) -> f64 {
        self.substitution
            .min()
            .min(self.gap.open())
            .min(self.gap.extend())
    }
}

impl<G: AffineCost, S: Substitution> Metric<str> for NeedlemanWunsch<G, S> {
    fn compare(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        let len = a_chars.len().max(b_chars.len()) as f64;

        let max_score = len * self.substitution.max();
        let min_score = len * self.lowest_column();
        let score = self.score(&a_chars, &b_chars);

        ((score - min_score) / (max_score - min_score)).clamp(0.0, 1.0)
    }
}

impl<G: AffineCost, S: Substitution> Distance<str> for NeedlemanWunsch<G, S> {
    fn distance(&self, a: &str, b: &str) -> f64 {
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        let len = a_chars.len().max(b_chars.len()) as f64;

        (len * self.substitution.max() - self.score(&a_chars, &b_chars)).max(0.0)
    }
}
