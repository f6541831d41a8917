//! Pipeline builders
//!
//! A pipeline simplifies both inputs, optionally tokenizes them, and hands
//! the result to one terminal metric or distance:
//!
//! ```
//! use std::sync::Arc;
//! use fuzzymetrics::algorithms::CosineSimilarity;
//! use fuzzymetrics::builders::StringMetricBuilder;
//! use fuzzymetrics::simplifiers::ToLowerCase;
//! use fuzzymetrics::tokenizers::Whitespace;
//!
//! let metric = StringMetricBuilder::with_multiset(CosineSimilarity)
//!     .simplify(Arc::new(ToLowerCase))
//!     .tokenize(Arc::new(Whitespace))
//!     .build();
//!
//! let score = metric.compare("Test string1", "test STRING2").unwrap();
//! assert!((score - 0.5).abs() < 1e-4);
//! ```
//!
//! Which steps are available is tracked in the builder's type. A collection
//! comparator cannot be built before `.tokenize`, a string comparator has
//! no `.tokenize`, and caches attach only to stages that exist.

use ahash::AHashSet;

use crate::error::{Result, Shape};
use crate::multiset::Multiset;
use crate::tokenizers::Tokenizer;

mod caching;
mod distance;
mod metric;
mod pipeline;

pub use caching::{
    CachingListTokenizer, CachingMultisetTokenizer, CachingSetTokenizer, CachingSimplifier,
    CachingTokenizer,
};
pub use distance::{StringDistance, StringDistanceBuilder};
pub use metric::{StringMetric, StringMetricBuilder};
pub use pipeline::{
    CachedSimplifierStep, CachedStringStep, CachedTokensStep, CollectionStep, Pipeline,
    SimplifiedCollectionStep, SimplifiedStringStep, StringStep, TokenizedStep,
};

/// Token collection shape a pipeline can feed to its comparator.
///
/// Implemented for `Vec<String>`, `AHashSet<String>` and
/// `Multiset<String>`. `Compared` is the type the comparator receives,
/// which for lists is the unsized slice `[String]`.
pub trait TokenCollection: Clone + Send + Sync + 'static {
    type Compared: ?Sized;

    const SHAPE: Shape;

    fn tokenize(tokenizer: &dyn Tokenizer, input: &str) -> Result<Self>;

    fn compared(&self) -> &Self::Compared;
}

impl TokenCollection for Vec<String> {
    type Compared = [String];

    const SHAPE: Shape = Shape::List;

    fn tokenize(tokenizer: &dyn Tokenizer, input: &str) -> Result<Self> {
        tokenizer.tokenize_to_list(input)
    }

    fn compared(&self) -> &[String] {
        self
    }
}

impl TokenCollection for AHashSet<String> {
    type Compared = Self;

    const SHAPE: Shape = Shape::Set;

    fn tokenize(tokenizer: &dyn Tokenizer, input: &str) -> Result<Self> {
        tokenizer.tokenize_to_set(input)
    }

    fn compared(&self) -> &Self {
        self
    }
}

impl TokenCollection for Multiset<String> {
    type Compared = Self;

    const SHAPE: Shape = Shape::Multiset;

    fn tokenize(tokenizer: &dyn Tokenizer, input: &str) -> Result<Self> {
        tokenizer.tokenize_to_multiset(input)
    }

    fn compared(&self) -> &Self {
        self
    }
}
