//! Cost functions for the alignment algorithms
//!
//! Gap and substitution costs are expressed as *scores*: matches are
//! rewarded with positive values, gaps and mismatches penalized with
//! values `<= 0`.

use crate::error::{Result, SimilarityError};

// ============================================================================
// Gap costs
// ============================================================================

/// Prices a contiguous run of insertions or deletions.
///
/// `value(from, to)` scores a gap spanning the positions `from..to`, so the
/// run length is `to - from`. Implementations advertise the range their
/// values fall in through `min()` and `max()`.
pub trait Gap: Send + Sync {
    /// Score of a gap covering `from..to`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= to`.
    fn value(&self, from: usize, to: usize) -> f64;

    /// Lowest value this function can return.
    fn min(&self) -> f64;

    /// Highest value this function can return.
    fn max(&self) -> f64;
}

/// A [`Gap`] whose every run costs `open + extend * (len - 1)`.
///
/// The three-state aligners price gaps from these two numbers alone, so
/// only implement this when `value` really is affine in the run length.
/// Other gap functions belong with [`SmithWaterman`](super::SmithWaterman).
pub trait AffineCost: Gap {
    /// Score of a gap of length one.
    fn open(&self) -> f64;

    /// Score added by each position after the first.
    fn extend(&self) -> f64;
}

#[inline]
fn span(from: usize, to: usize) -> usize {
    assert!(from < to, "gap must span at least one position: from={from}, to={to}");
    to - from
}

fn check_gap_value(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value > 0.0 {
        return Err(SimilarityError::invalid(format!(
            "{name} must be finite and <= 0, got {value}"
        )));
    }
    Ok(())
}

/// Every gap position costs the same: `value * (to - from)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGap {
    pub(crate) value: f64,
}

impl LinearGap {
    pub fn new(value: f64) -> Result<Self> {
        check_gap_value("gap value", value)?;
        Ok(Self { value })
    }
}

impl Gap for LinearGap {
    fn value(&self, from: usize, to: usize) -> f64 {
        self.value * span(from, to) as f64
    }

    fn min(&self) -> f64 {
        if self.value == 0.0 {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    }

    fn max(&self) -> f64 {
        self.value
    }
}

/// Opening a gap costs `open`, every further position costs `extend`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineGap {
    pub(crate) open: f64,
    pub(crate) extend: f64,
}

impl AffineGap {
    pub fn new(open: f64, extend: f64) -> Result<Self> {
        check_gap_value("gap open value", open)?;
        check_gap_value("gap extend value", extend)?;
        Ok(Self { open, extend })
    }
}

impl AffineCost for LinearGap {
    fn open(&self) -> f64 {
        self.value
    }

    fn extend(&self) -> f64 {
        self.value
    }
}

impl Gap for AffineGap {
    fn value(&self, from: usize, to: usize) -> f64 {
        self.open + self.extend * (span(from, to) - 1) as f64
    }

    fn min(&self) -> f64 {
        if self.extend == 0.0 {
            self.open
        } else {
            f64::NEG_INFINITY
        }
    }

    fn max(&self) -> f64 {
        self.open
    }
}

/// A gap of any length costs the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantGap {
    pub(crate) value: f64,
}

impl ConstantGap {
    pub fn new(value: f64) -> Result<Self> {
        check_gap_value("gap value", value)?;
        Ok(Self { value })
    }
}

impl AffineCost for AffineGap {
    fn open(&self) -> f64 {
        self.open
    }

    fn extend(&self) -> f64 {
        self.extend
    }
}

impl Gap for ConstantGap {
    fn value(&self, from: usize, to: usize) -> f64 {
        let _ = span(from, to);
        self.value
    }

    fn min(&self) -> f64 {
        self.value
    }

    fn max(&self) -> f64 {
        self.value
    }
}

impl AffineCost for ConstantGap {
    fn open(&self) -> f64 {
        self.value
    }

    fn extend(&self) -> f64 {
        0.0
    }
}

// ============================================================================
// Substitution costs
// ============================================================================

/// Scores aligning `a[i]` against `b[j]`.
pub trait Substitution: Send + Sync {
    fn compare(&self, a: &[char], i: usize, b: &[char], j: usize) -> f64;

    fn min(&self) -> f64;

    fn max(&self) -> f64;
}

/// Fixed reward for equal characters and fixed penalty otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchMismatch {
    pub(crate) match_value: f64,
    pub(crate) mismatch_value: f64,
}

impl MatchMismatch {
    pub fn new(match_value: f64, mismatch_value: f64) -> Result<Self> {
        if !match_value.is_finite() || !mismatch_value.is_finite() {
            return Err(SimilarityError::invalid("match and mismatch values must be finite"));
        }
        if match_value <= mismatch_value {
            return Err(SimilarityError::invalid(format!(
                "match value ({match_value}) must be greater than mismatch value ({mismatch_value})"
            )));
        }
        Ok(Self {
            match_value,
            mismatch_value,
        })
    }
}

impl Substitution for MatchMismatch {
    #[inline]
    fn compare(&self, a: &[char], i: usize, b: &[char], j: usize) -> f64 {
        if a[i] == b[j] {
            self.match_value
        } else {
            self.mismatch_value
        }
    }

    fn min(&self) -> f64 {
        self.mismatch_value
    }

    fn max(&self) -> f64 {
        self.match_value
    }
}
