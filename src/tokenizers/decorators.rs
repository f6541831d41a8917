//! Filtering and transforming decorators for tokenizers.

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;

use super::{Composition, Tokenizer};
use crate::error::Result;
use crate::multiset::Multiset;

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;
type Function = Arc<dyn Fn(&str) -> String + Send + Sync>;

// ============================================================================
// Filter
// ============================================================================

/// Keeps only the tokens accepted by a predicate.
#[derive(Clone)]
pub struct Filter {
    tokenizer: Arc<dyn Tokenizer>,
    predicate: Predicate,
}

impl Filter {
    pub fn new<P>(tokenizer: Arc<dyn Tokenizer>, predicate: P) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            tokenizer,
            predicate: Arc::new(predicate),
        }
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn accepts(&self, token: &str) -> bool {
        (self.predicate)(token)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

impl Tokenizer for Filter {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        let mut tokens = self.tokenizer.tokenize_to_list(input)?;
        tokens.retain(|token| self.accepts(token));
        Ok(tokens)
    }

    fn tokenize_to_set(&self, input: &str) -> Result<AHashSet<String>> {
        let mut tokens = self.tokenizer.tokenize_to_set(input)?;
        tokens.retain(|token| self.accepts(token));
        Ok(tokens)
    }

    fn tokenize_to_multiset(&self, input: &str) -> Result<Multiset<String>> {
        let mut tokens = self.tokenizer.tokenize_to_multiset(input)?;
        tokens.retain(|token| self.accepts(token));
        Ok(tokens)
    }

    fn composition(&self) -> Composition<'_> {
        Composition::Filter(self)
    }
}

/// Drop tokens rejected by `predicate`.
///
/// Filtering a [`Filter`] combines both predicates over the original
/// tokenizer instead of stacking another layer.
pub fn filter<P>(tokenizer: Arc<dyn Tokenizer>, predicate: P) -> Arc<dyn Tokenizer>
where
    P: Fn(&str) -> bool + Send + Sync + 'static,
{
    if let Composition::Filter(existing) = tokenizer.composition() {
        let first = Arc::clone(&existing.predicate);
        let inner = Arc::clone(&existing.tokenizer);
        return Arc::new(Filter::new(inner, move |token: &str| {
            first(token) && predicate(token)
        }));
    }
    Arc::new(Filter::new(tokenizer, predicate))
}

// ============================================================================
// Transform
// ============================================================================

/// Maps every token through a function.
#[derive(Clone)]
pub struct Transform {
    tokenizer: Arc<dyn Tokenizer>,
    function: Function,
}

impl Transform {
    pub fn new<F>(tokenizer: Arc<dyn Tokenizer>, function: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            tokenizer,
            function: Arc::new(function),
        }
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn apply(&self, token: &str) -> String {
        (self.function)(token)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

impl Tokenizer for Transform {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        Ok(self
            .tokenizer
            .tokenize_to_list(input)?
            .iter()
            .map(|token| self.apply(token))
            .collect())
    }

    // Distinct tokens may map to the same output, so transform before collecting
    fn tokenize_to_set(&self, input: &str) -> Result<AHashSet<String>> {
        Ok(self
            .tokenizer
            .tokenize_to_set(input)?
            .iter()
            .map(|token| self.apply(token))
            .collect())
    }

    fn tokenize_to_multiset(&self, input: &str) -> Result<Multiset<String>> {
        let tokens = self.tokenizer.tokenize_to_multiset(input)?;
        let mut transformed = Multiset::with_capacity(tokens.distinct_len());
        for (token, count) in tokens.iter() {
            transformed.insert_many(self.apply(token), count);
        }
        Ok(transformed)
    }

    fn composition(&self) -> Composition<'_> {
        Composition::Transform(self)
    }
}

/// Map every token through `function`.
///
/// Transforming a [`Transform`] composes the functions, applying the
/// existing one first.
pub fn transform<F>(tokenizer: Arc<dyn Tokenizer>, function: F) -> Arc<dyn Tokenizer>
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    if let Composition::Transform(existing) = tokenizer.composition() {
        let first = Arc::clone(&existing.function);
        let inner = Arc::clone(&existing.tokenizer);
        return Arc::new(Transform::new(inner, move |token: &str| {
            function(&first(token))
        }));
    }
    Arc::new(Transform::new(tokenizer, function))
}
