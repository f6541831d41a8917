//! Ready-made similarity pipelines.
//!
//! Token based metrics split on whitespace unless noted otherwise. None of
//! these pipelines simplify their input; use
//! [`StringMetricBuilder`](crate::builders::StringMetricBuilder) to add
//! simplification or caching.

use std::sync::Arc;

use crate::algorithms::{
    BlockDistance, CosineSimilarity, DamerauLevenshtein, Dice, EuclideanDistance,
    GeneralizedJaccard, Identity, Jaccard, Jaro, JaroWinkler, Level2, Levenshtein,
    LongestCommonSubsequence, LongestCommonSubstring, NeedlemanWunsch, OverlapCoefficient,
    SimonWhite, SmithWaterman, SmithWatermanGotoh,
};
use crate::builders::{StringMetric, StringMetricBuilder};
use crate::tokenizers::{QGram, QGramExtended, Whitespace};

pub fn block_distance() -> StringMetric {
    StringMetricBuilder::with_multiset(BlockDistance)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn cosine_similarity() -> StringMetric {
    StringMetricBuilder::with_multiset(CosineSimilarity)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn damerau_levenshtein() -> StringMetric {
    StringMetricBuilder::with(DamerauLevenshtein::new()).build()
}

pub fn dice() -> StringMetric {
    StringMetricBuilder::with_set(Dice)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn euclidean_distance() -> StringMetric {
    StringMetricBuilder::with_multiset(EuclideanDistance)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn generalized_jaccard() -> StringMetric {
    StringMetricBuilder::with_multiset(GeneralizedJaccard)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn identity() -> StringMetric {
    StringMetricBuilder::with(Identity).build()
}

pub fn jaccard() -> StringMetric {
    StringMetricBuilder::with_set(Jaccard)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn jaro() -> StringMetric {
    StringMetricBuilder::with(Jaro::new()).build()
}

pub fn jaro_winkler() -> StringMetric {
    StringMetricBuilder::with(JaroWinkler::new()).build()
}

pub fn levenshtein() -> StringMetric {
    StringMetricBuilder::with(Levenshtein::new()).build()
}

/// Monge-Elkan over whitespace tokens, scoring tokens with Smith-Waterman-Gotoh.
pub fn level2_smith_waterman_gotoh() -> StringMetric {
    StringMetricBuilder::with_list(Level2::new(SmithWatermanGotoh::new()))
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn longest_common_subsequence() -> StringMetric {
    StringMetricBuilder::with(LongestCommonSubsequence).build()
}

pub fn longest_common_substring() -> StringMetric {
    StringMetricBuilder::with(LongestCommonSubstring).build()
}

pub fn needleman_wunsch() -> StringMetric {
    StringMetricBuilder::with(NeedlemanWunsch::new()).build()
}

pub fn overlap_coefficient() -> StringMetric {
    StringMetricBuilder::with_set(OverlapCoefficient)
        .tokenize(Arc::new(Whitespace))
        .build()
}

/// Block distance over padded 3-grams.
pub fn q_grams_distance() -> StringMetric {
    StringMetricBuilder::with_multiset(BlockDistance)
        .tokenize(Arc::new(QGramExtended::trigrams()))
        .build()
}

/// Simon White over the bigrams of every whitespace token.
pub fn simon_white() -> StringMetric {
    StringMetricBuilder::with_multiset(SimonWhite)
        .tokenize(Arc::new(Whitespace))
        .tokenize(Arc::new(QGram::bigrams()))
        .build()
}

pub fn smith_waterman() -> StringMetric {
    StringMetricBuilder::with(SmithWaterman::new()).build()
}

pub fn smith_waterman_gotoh() -> StringMetric {
    StringMetricBuilder::with(SmithWatermanGotoh::new()).build()
}
