//! Level-2 (Monge-Elkan) combinator
//!
//! Lifts a token-level string metric to token lists. Each token of one
//! list is matched with its best counterpart in the other and the best
//! scores are averaged:
//!
//! ```text
//! monge_elkan(a, b) = mean over s in a of (max over q in b of m(s, q))
//! level2(a, b)      = sqrt(monge_elkan(a, b) * monge_elkan(b, a))
//! ```
//!
//! The directional score is not symmetric; the geometric mean is.

use super::{Metric, SmithWatermanGotoh};

/// Level-2 list metric over an inner string metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level2<M = SmithWatermanGotoh> {
    metric: M,
}

impl<M: Metric<str>> Level2<M> {
    pub fn new(metric: M) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Directional Monge-Elkan score of `a` against `b`.
    ///
    /// Two empty lists score 1, one empty list scores 0.
    pub fn monge_elkan(&self, a: &[String], b: &[String]) -> f64 {
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let total: f64 = a
            .iter()
            .map(|s| {
                b.iter()
                    .map(|q| self.metric.compare(s, q))
                    .fold(0.0f64, f64::max)
            })
            .sum();
        total / a.len() as f64
    }
}

impl Default for Level2 {
    fn default() -> Self {
        Self::new(SmithWatermanGotoh::new())
    }
}

impl<M: Metric<str>> Metric<[String]> for Level2<M> {
    fn compare(&self, a: &[String], b: &[String]) -> f64 {
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        (self.monge_elkan(a, b) * self.monge_elkan(b, a)).sqrt()
    }
}
