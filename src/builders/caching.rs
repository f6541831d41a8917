//! Caching decorators for simplifiers and tokenizers.
//!
//! Both decorators key the cache by the raw input string. A hit returns the
//! stored value without calling the wrapped stage. A failing cache or
//! loader is reported as [`SimilarityError::Cache`] and never retried
//! uncached.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use ahash::AHashSet;

use super::TokenCollection;
use crate::cache::Cache;
use crate::error::{Result, Shape, SimilarityError};
use crate::multiset::Multiset;
use crate::simplifiers::Simplifier;
use crate::tokenizers::Tokenizer;

fn cache_failure(key: &str, source: crate::error::CacheError) -> SimilarityError {
    SimilarityError::Cache {
        key: key.to_owned(),
        source,
    }
}

// ============================================================================
// CachingSimplifier
// ============================================================================

/// Simplifier that remembers its results.
#[derive(Clone)]
pub struct CachingSimplifier {
    simplifier: Arc<dyn Simplifier>,
    cache: Arc<dyn Cache<String>>,
}

impl CachingSimplifier {
    pub fn new(simplifier: Arc<dyn Simplifier>, cache: Arc<dyn Cache<String>>) -> Self {
        Self { simplifier, cache }
    }

    pub fn simplifier(&self) -> &Arc<dyn Simplifier> {
        &self.simplifier
    }
}

impl fmt::Debug for CachingSimplifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachingSimplifier").finish_non_exhaustive()
    }
}

impl Simplifier for CachingSimplifier {
    fn simplify(&self, input: &str) -> Result<String> {
        let compute = || {
            tracing::trace!(input, "simplifier cache miss");
            self.simplifier.simplify(input)
        };
        self.cache
            .get_or_compute(input, &compute)
            .map_err(|source| cache_failure(input, source))
    }
}

// ============================================================================
// CachingTokenizer
// ============================================================================

/// Tokenizer that remembers its results for one collection shape.
///
/// Asking for any other shape returns
/// [`SimilarityError::UnsupportedShape`].
pub struct CachingTokenizer<C> {
    tokenizer: Arc<dyn Tokenizer>,
    cache: Arc<dyn Cache<C>>,
    shape: PhantomData<fn() -> C>,
}

pub type CachingListTokenizer = CachingTokenizer<Vec<String>>;
pub type CachingSetTokenizer = CachingTokenizer<AHashSet<String>>;
pub type CachingMultisetTokenizer = CachingTokenizer<Multiset<String>>;

impl<C: TokenCollection> CachingTokenizer<C> {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, cache: Arc<dyn Cache<C>>) -> Self {
        Self {
            tokenizer,
            cache,
            shape: PhantomData,
        }
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    fn cached(&self, input: &str) -> Result<C> {
        let compute = || {
            tracing::trace!(input, shape = %C::SHAPE, "tokenizer cache miss");
            C::tokenize(self.tokenizer.as_ref(), input)
        };
        self.cache
            .get_or_compute(input, &compute)
            .map_err(|source| cache_failure(input, source))
    }

    fn unsupported(shape: Shape) -> SimilarityError {
        SimilarityError::UnsupportedShape {
            tokenizer: "caching",
            shape,
        }
    }
}

impl<C> Clone for CachingTokenizer<C> {
    fn clone(&self) -> Self {
        Self {
            tokenizer: Arc::clone(&self.tokenizer),
            cache: Arc::clone(&self.cache),
            shape: PhantomData,
        }
    }
}

impl<C: TokenCollection> fmt::Debug for CachingTokenizer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachingTokenizer")
            .field("shape", &C::SHAPE)
            .finish_non_exhaustive()
    }
}

impl Tokenizer for CachingListTokenizer {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        self.cached(input)
    }

    fn tokenize_to_set(&self, _input: &str) -> Result<AHashSet<String>> {
        Err(Self::unsupported(Shape::Set))
    }

    fn tokenize_to_multiset(&self, _input: &str) -> Result<Multiset<String>> {
        Err(Self::unsupported(Shape::Multiset))
    }
}

impl Tokenizer for CachingSetTokenizer {
    fn tokenize_to_list(&self, _input: &str) -> Result<Vec<String>> {
        Err(Self::unsupported(Shape::List))
    }

    fn tokenize_to_set(&self, input: &str) -> Result<AHashSet<String>> {
        self.cached(input)
    }

    fn tokenize_to_multiset(&self, _input: &str) -> Result<Multiset<String>> {
        Err(Self::unsupported(Shape::Multiset))
    }
}

impl Tokenizer for CachingMultisetTokenizer {
    fn tokenize_to_list(&self, _input: &str) -> Result<Vec<String>> {
        Err(Self::unsupported(Shape::List))
    }

    fn tokenize_to_set(&self, _input: &str) -> Result<AHashSet<String>> {
        Err(Self::unsupported(Shape::Set))
    }

    fn tokenize_to_multiset(&self, input: &str) -> Result<Multiset<String>> {
        self.cached(input)
    }
}
