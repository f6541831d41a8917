//! Exact equality as a metric.

use super::{Distance, Metric};

/// Scores 1.0 for equal inputs and 0.0 otherwise.
///
/// Works for any `PartialEq` type, including `str`, token lists and sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Identity {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq + ?Sized> Metric<T> for Identity {
    fn compare(&self, a: &T, b: &T) -> f64 {
        if a == b {
            1.0
        } else {
            0.0
        }
    }
}

impl<T: PartialEq + ?Sized> Distance<T> for Identity {
    fn distance(&self, a: &T, b: &T) -> f64 {
        1.0 - self.compare(a, b)
    }
}
