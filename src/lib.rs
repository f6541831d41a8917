//! FuzzyMetrics - composable string similarity and distance metrics
//!
//! Scores pairs of strings with edit-distance, alignment and token-overlap
//! algorithms, optionally simplifying and tokenizing the input first.
//!
//! # Features
//! - Edit distances (Levenshtein, Damerau-Levenshtein, Hamming, LCS)
//! - Affine-gap alignment (Needleman-Wunsch, Smith-Waterman, Smith-Waterman-Gotoh)
//! - Set and multiset metrics (Jaccard, Dice, cosine, overlap, block, Euclidean)
//! - Simplifier and tokenizer chains with caching decorators
//! - Typestate pipeline builders and parallel batch scoring
//!
//! # Example
//!
//! ```
//! use fuzzymetrics::string_metrics;
//!
//! let metric = string_metrics::jaccard();
//! let score = metric.compare("test string1", "test string2").unwrap();
//! assert!((score - 1.0 / 3.0).abs() < 1e-9);
//! ```

pub mod algorithms;
pub mod batch;
pub mod builders;
pub mod cache;
pub mod error;
pub mod multiset;
pub mod simplifiers;
pub mod string_distances;
pub mod string_metrics;
pub mod tokenizers;

pub use algorithms::{Distance, Metric};
pub use builders::{StringDistance, StringDistanceBuilder, StringMetric, StringMetricBuilder};
pub use cache::{BoundedCache, Cache, CacheConfig, UnboundedCache};
pub use error::{Result, Shape, SimilarityError};
pub use multiset::Multiset;
pub use simplifiers::Simplifier;
pub use tokenizers::Tokenizer;
