//! Assembled pipelines and the typestate steps that build them.

use std::borrow::Cow;
use std::marker::PhantomData;
use std::sync::Arc;

use super::caching::{CachingSimplifier, CachingTokenizer};
use super::TokenCollection;
use crate::algorithms::{Distance, Metric};
use crate::cache::Cache;
use crate::error::Result;
use crate::simplifiers::{self, Simplifier};
use crate::tokenizers::{self, Tokenizer};

// ============================================================================
// Scoring
// ============================================================================

/// Terminal comparison of a pipeline, either a similarity or a distance.
pub(crate) trait Scorer<T: ?Sized>: Send + Sync {
    fn score(&self, a: &T, b: &T) -> f64;
}

pub(crate) struct Similarity<M>(pub(crate) M);

impl<T: ?Sized, M: Metric<T>> Scorer<T> for Similarity<M> {
    fn score(&self, a: &T, b: &T) -> f64 {
        self.0.compare(a, b)
    }
}

pub(crate) struct Dissimilarity<D>(pub(crate) D);

impl<T: ?Sized, D: Distance<T>> Scorer<T> for Dissimilarity<D> {
    fn score(&self, a: &T, b: &T) -> f64 {
        self.0.distance(a, b)
    }
}

trait Evaluate: Send + Sync {
    fn evaluate(&self, a: &str, b: &str) -> Result<f64>;
}

fn simplified<'a>(simplifier: Option<&Arc<dyn Simplifier>>, input: &'a str) -> Result<Cow<'a, str>> {
    match simplifier {
        Some(simplifier) => Ok(Cow::Owned(simplifier.simplify(input)?)),
        None => Ok(Cow::Borrowed(input)),
    }
}

struct ForStrings {
    simplifier: Option<Arc<dyn Simplifier>>,
    scorer: Arc<dyn Scorer<str>>,
}

impl Evaluate for ForStrings {
    fn evaluate(&self, a: &str, b: &str) -> Result<f64> {
        let a = simplified(self.simplifier.as_ref(), a)?;
        let b = simplified(self.simplifier.as_ref(), b)?;
        Ok(self.scorer.score(&a, &b))
    }
}

struct ForTokens<C: TokenCollection> {
    simplifier: Option<Arc<dyn Simplifier>>,
    tokenizer: Arc<dyn Tokenizer>,
    scorer: Arc<dyn Scorer<C::Compared>>,
}

impl<C: TokenCollection> Evaluate for ForTokens<C> {
    fn evaluate(&self, a: &str, b: &str) -> Result<f64> {
        let a = simplified(self.simplifier.as_ref(), a)?;
        let b = simplified(self.simplifier.as_ref(), b)?;
        let a = C::tokenize(self.tokenizer.as_ref(), &a)?;
        let b = C::tokenize(self.tokenizer.as_ref(), &b)?;
        Ok(self.scorer.score(a.compared(), b.compared()))
    }
}

/// A frozen comparison pipeline.
///
/// Shared by [`StringMetric`](super::StringMetric) and
/// [`StringDistance`](super::StringDistance); cheap to clone.
#[derive(Clone)]
pub struct Pipeline {
    inner: Arc<dyn Evaluate>,
}

impl Pipeline {
    /// Run both inputs through every stage and score the results.
    pub fn evaluate(&self, a: &str, b: &str) -> Result<f64> {
        self.inner.evaluate(a, b)
    }

    fn for_strings(simplifier: Option<Arc<dyn Simplifier>>, scorer: Arc<dyn Scorer<str>>) -> Self {
        tracing::debug!(simplified = simplifier.is_some(), "assembled string pipeline");
        Self {
            inner: Arc::new(ForStrings { simplifier, scorer }),
        }
    }

    fn for_tokens<C: TokenCollection>(
        simplifier: Option<Arc<dyn Simplifier>>,
        tokenizer: Arc<dyn Tokenizer>,
        scorer: Arc<dyn Scorer<C::Compared>>,
    ) -> Self {
        tracing::debug!(
            shape = %C::SHAPE,
            simplified = simplifier.is_some(),
            "assembled token pipeline"
        );
        Self {
            inner: Arc::new(ForTokens::<C> {
                simplifier,
                tokenizer,
                scorer,
            }),
        }
    }
}

// ============================================================================
// String comparator steps
// ============================================================================

/// Start of a pipeline around a string comparator.
pub struct StringStep<O> {
    scorer: Arc<dyn Scorer<str>>,
    output: PhantomData<fn() -> O>,
}

impl<O: From<Pipeline>> StringStep<O> {
    pub(crate) fn new(scorer: Arc<dyn Scorer<str>>) -> Self {
        Self {
            scorer,
            output: PhantomData,
        }
    }

    pub fn simplify(self, simplifier: Arc<dyn Simplifier>) -> SimplifiedStringStep<O> {
        SimplifiedStringStep {
            scorer: self.scorer,
            simplifiers: vec![simplifier],
            output: PhantomData,
        }
    }

    pub fn build(self) -> O {
        Pipeline::for_strings(None, self.scorer).into()
    }
}

/// String pipeline with at least one simplifier.
pub struct SimplifiedStringStep<O> {
    scorer: Arc<dyn Scorer<str>>,
    simplifiers: Vec<Arc<dyn Simplifier>>,
    output: PhantomData<fn() -> O>,
}

impl<O: From<Pipeline>> SimplifiedStringStep<O> {
    pub fn simplify(mut self, simplifier: Arc<dyn Simplifier>) -> Self {
        self.simplifiers.push(simplifier);
        self
    }

    /// Cache the output of every simplifier added so far.
    pub fn cache_strings(self, cache: Arc<dyn Cache<String>>) -> CachedStringStep<O> {
        let simplifier = simplifiers::chain(self.simplifiers);
        CachedStringStep {
            scorer: self.scorer,
            simplifier: Arc::new(CachingSimplifier::new(simplifier, cache)),
            output: PhantomData,
        }
    }

    pub fn build(self) -> O {
        let simplifier = simplifiers::chain(self.simplifiers);
        Pipeline::for_strings(Some(simplifier), self.scorer).into()
    }
}

/// String pipeline with cached simplification.
pub struct CachedStringStep<O> {
    scorer: Arc<dyn Scorer<str>>,
    simplifier: Arc<dyn Simplifier>,
    output: PhantomData<fn() -> O>,
}

impl<O: From<Pipeline>> CachedStringStep<O> {
    pub fn build(self) -> O {
        Pipeline::for_strings(Some(self.simplifier), self.scorer).into()
    }
}

// ============================================================================
// Collection comparator steps
// ============================================================================

/// Start of a pipeline around a token collection comparator.
pub struct CollectionStep<C: TokenCollection, O> {
    scorer: Arc<dyn Scorer<C::Compared>>,
    output: PhantomData<fn() -> O>,
}

impl<C: TokenCollection, O: From<Pipeline>> CollectionStep<C, O> {
    pub(crate) fn new(scorer: Arc<dyn Scorer<C::Compared>>) -> Self {
        Self {
            scorer,
            output: PhantomData,
        }
    }

    pub fn simplify(self, simplifier: Arc<dyn Simplifier>) -> SimplifiedCollectionStep<C, O> {
        SimplifiedCollectionStep {
            scorer: self.scorer,
            simplifiers: vec![simplifier],
            output: PhantomData,
        }
    }

    pub fn tokenize(self, tokenizer: Arc<dyn Tokenizer>) -> TokenizedStep<C, O> {
        TokenizedStep {
            scorer: self.scorer,
            simplifier: None,
            tokenizer,
            output: PhantomData,
        }
    }
}

/// Collection pipeline with at least one simplifier, not yet tokenized.
pub struct SimplifiedCollectionStep<C: TokenCollection, O> {
    scorer: Arc<dyn Scorer<C::Compared>>,
    simplifiers: Vec<Arc<dyn Simplifier>>,
    output: PhantomData<fn() -> O>,
}

impl<C: TokenCollection, O: From<Pipeline>> SimplifiedCollectionStep<C, O> {
    pub fn simplify(mut self, simplifier: Arc<dyn Simplifier>) -> Self {
        self.simplifiers.push(simplifier);
        self
    }

    /// Cache the output of every simplifier added so far.
    pub fn cache_strings(self, cache: Arc<dyn Cache<String>>) -> CachedSimplifierStep<C, O> {
        let simplifier = simplifiers::chain(self.simplifiers);
        CachedSimplifierStep {
            scorer: self.scorer,
            simplifier: Arc::new(CachingSimplifier::new(simplifier, cache)),
            output: PhantomData,
        }
    }

    pub fn tokenize(self, tokenizer: Arc<dyn Tokenizer>) -> TokenizedStep<C, O> {
        TokenizedStep {
            scorer: self.scorer,
            simplifier: Some(simplifiers::chain(self.simplifiers)),
            tokenizer,
            output: PhantomData,
        }
    }
}

/// Collection pipeline with cached simplification, not yet tokenized.
pub struct CachedSimplifierStep<C: TokenCollection, O> {
    scorer: Arc<dyn Scorer<C::Compared>>,
    simplifier: Arc<dyn Simplifier>,
    output: PhantomData<fn() -> O>,
}

impl<C: TokenCollection, O: From<Pipeline>> CachedSimplifierStep<C, O> {
    pub fn tokenize(self, tokenizer: Arc<dyn Tokenizer>) -> TokenizedStep<C, O> {
        TokenizedStep {
            scorer: self.scorer,
            simplifier: Some(self.simplifier),
            tokenizer,
            output: PhantomData,
        }
    }
}

/// Collection pipeline with a tokenizer; ready to build.
pub struct TokenizedStep<C: TokenCollection, O> {
    scorer: Arc<dyn Scorer<C::Compared>>,
    simplifier: Option<Arc<dyn Simplifier>>,
    tokenizer: Arc<dyn Tokenizer>,
    output: PhantomData<fn() -> O>,
}

impl<C: TokenCollection, O: From<Pipeline>> TokenizedStep<C, O> {
    /// Re-tokenize every token produced so far.
    pub fn tokenize(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizers::chain_pair(self.tokenizer, tokenizer);
        self
    }

    /// Keep only tokens accepted by `predicate`.
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.tokenizer = tokenizers::filter(self.tokenizer, predicate);
        self
    }

    /// Map every token through `function`.
    pub fn transform<F>(mut self, function: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.tokenizer = tokenizers::transform(self.tokenizer, function);
        self
    }

    /// Cache the tokens produced by every stage added so far.
    pub fn cache_tokens(self, cache: Arc<dyn Cache<C>>) -> CachedTokensStep<C, O>
    where
        CachingTokenizer<C>: Tokenizer,
    {
        CachedTokensStep {
            scorer: self.scorer,
            simplifier: self.simplifier,
            tokenizer: Arc::new(CachingTokenizer::new(self.tokenizer, cache)),
            output: PhantomData,
        }
    }

    pub fn build(self) -> O {
        Pipeline::for_tokens::<C>(self.simplifier, self.tokenizer, self.scorer).into()
    }
}

/// Collection pipeline with cached tokenization.
pub struct CachedTokensStep<C: TokenCollection, O> {
    scorer: Arc<dyn Scorer<C::Compared>>,
    simplifier: Option<Arc<dyn Simplifier>>,
    tokenizer: Arc<dyn Tokenizer>,
    output: PhantomData<fn() -> O>,
}

impl<C: TokenCollection, O: From<Pipeline>> CachedTokensStep<C, O> {
    pub fn build(self) -> O {
        Pipeline::for_tokens::<C>(self.simplifier, self.tokenizer, self.scorer).into()
    }
}
