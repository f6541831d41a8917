//! Scoring one query against many candidates.
//!
//! Large candidate lists are scored on the rayon thread pool; small ones
//! sequentially. Results are identical either way.

use rayon::prelude::*;
use serde::Serialize;

use crate::builders::StringMetric;
use crate::error::{Result, SimilarityError};

// ============================================================================
// Constants
// ============================================================================

/// Minimum number of candidates scored in parallel.
///
/// Below this the thread pool coordination costs more than it saves.
const PARALLEL_THRESHOLD: usize = 100;

/// A scored candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match {
    /// Position of the candidate in the input slice
    pub index: usize,
    pub score: f64,
}

fn check_min_similarity(min_similarity: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&min_similarity) {
        return Err(SimilarityError::invalid(format!(
            "min_similarity must be in [0, 1], got {min_similarity}"
        )));
    }
    Ok(())
}

/// Score `query` against every candidate, in candidate order.
pub fn compare_all<S>(metric: &StringMetric, query: &str, choices: &[S]) -> Result<Vec<f64>>
where
    S: AsRef<str> + Sync,
{
    if choices.len() >= PARALLEL_THRESHOLD {
        choices
            .par_iter()
            .map(|choice| metric.compare(query, choice.as_ref()))
            .collect()
    } else {
        choices
            .iter()
            .map(|choice| metric.compare(query, choice.as_ref()))
            .collect()
    }
}

/// Candidates scoring at least `min_similarity`, best first.
///
/// Ties keep candidate order. At most `limit` matches are returned.
pub fn extract<S>(
    metric: &StringMetric,
    query: &str,
    choices: &[S],
    limit: usize,
    min_similarity: f64,
) -> Result<Vec<Match>>
where
    S: AsRef<str> + Sync,
{
    check_min_similarity(min_similarity)?;
    let scores = compare_all(metric, query, choices)?;

    let mut matches: Vec<Match> = scores
        .into_iter()
        .enumerate()
        .filter(|(_, score)| *score >= min_similarity)
        .map(|(index, score)| Match { index, score })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    matches.truncate(limit);
    Ok(matches)
}

/// The best scoring candidate, if any reaches `min_similarity`.
pub fn best_match<S>(
    metric: &StringMetric,
    query: &str,
    choices: &[S],
    min_similarity: f64,
) -> Result<Option<Match>>
where
    S: AsRef<str> + Sync,
{
    Ok(extract(metric, query, choices, 1, min_similarity)?.into_iter().next())
}
