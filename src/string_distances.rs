//! Ready-made distance pipelines.
//!
//! Counterparts of [`string_metrics`](crate::string_metrics). Bounded
//! measures report `1 - similarity`; edit, block and Euclidean distances
//! are unbounded.

use std::sync::Arc;

use crate::algorithms::{
    BlockDistance, CosineSimilarity, DamerauLevenshtein, Dice, EuclideanDistance,
    GeneralizedJaccard, Hamming, Identity, Jaccard, Jaro, JaroWinkler, Levenshtein,
    LongestCommonSubsequence, LongestCommonSubstring, NeedlemanWunsch, OverlapCoefficient,
    SimonWhite,
};
use crate::builders::{StringDistance, StringDistanceBuilder};
use crate::tokenizers::{QGram, QGramExtended, Whitespace};

/// L1 distance between whitespace token counts.
pub fn block_distance() -> StringDistance {
    StringDistanceBuilder::with_multiset(BlockDistance)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn cosine_similarity() -> StringDistance {
    StringDistanceBuilder::with_multiset(CosineSimilarity)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn damerau_levenshtein() -> StringDistance {
    StringDistanceBuilder::with(DamerauLevenshtein::new()).build()
}

pub fn dice() -> StringDistance {
    StringDistanceBuilder::with_set(Dice)
        .tokenize(Arc::new(Whitespace))
        .build()
}

/// L2 distance between whitespace token counts.
pub fn euclidean_distance() -> StringDistance {
    StringDistanceBuilder::with_multiset(EuclideanDistance)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn generalized_jaccard() -> StringDistance {
    StringDistanceBuilder::with_multiset(GeneralizedJaccard)
        .tokenize(Arc::new(Whitespace))
        .build()
}

/// Hamming distance, treating the shorter input as padded.
pub fn hamming() -> StringDistance {
    StringDistanceBuilder::with(Hamming).build()
}

pub fn identity() -> StringDistance {
    StringDistanceBuilder::with(Identity).build()
}

pub fn jaccard() -> StringDistance {
    StringDistanceBuilder::with_set(Jaccard)
        .tokenize(Arc::new(Whitespace))
        .build()
}

pub fn jaro() -> StringDistance {
    StringDistanceBuilder::with(Jaro::new()).build()
}

pub fn jaro_winkler() -> StringDistance {
    StringDistanceBuilder::with(JaroWinkler::new()).build()
}

pub fn levenshtein() -> StringDistance {
    StringDistanceBuilder::with(Levenshtein::new()).build()
}

pub fn longest_common_subsequence() -> StringDistance {
    StringDistanceBuilder::with(LongestCommonSubsequence).build()
}

pub fn longest_common_substring() -> StringDistance {
    StringDistanceBuilder::with(LongestCommonSubstring).build()
}

pub fn needleman_wunsch() -> StringDistance {
    StringDistanceBuilder::with(NeedlemanWunsch::new()).build()
}

pub fn overlap_coefficient() -> StringDistance {
    StringDistanceBuilder::with_set(OverlapCoefficient)
        .tokenize(Arc::new(Whitespace))
        .build()
}

/// Block distance over padded 3-grams.
pub fn q_grams_distance() -> StringDistance {
    StringDistanceBuilder::with_multiset(BlockDistance)
        .tokenize(Arc::new(QGramExtended::trigrams()))
        .build()
}

pub fn simon_white() -> StringDistance {
    StringDistanceBuilder::with_multiset(SimonWhite)
        .tokenize(Arc::new(Whitespace))
        .tokenize(Arc::new(QGram::bigrams()))
        .build()
}
