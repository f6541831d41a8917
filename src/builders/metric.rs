//! Similarity pipelines.

use std::sync::Arc;

use ahash::AHashSet;

use super::pipeline::{CollectionStep, Pipeline, Similarity, StringStep};
use super::TokenCollection;
use crate::algorithms::Metric;
use crate::error::Result;
use crate::multiset::Multiset;

/// A built similarity pipeline.
///
/// Scores are in `[0, 1]`; errors come only from fallible stages such as
/// caches.
#[derive(Clone)]
pub struct StringMetric {
    pipeline: Pipeline,
}

impl StringMetric {
    pub fn compare(&self, a: &str, b: &str) -> Result<f64> {
        self.pipeline.evaluate(a, b)
    }
}

impl From<Pipeline> for StringMetric {
    fn from(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}

/// Entry points for assembling a [`StringMetric`].
pub struct StringMetricBuilder;

impl StringMetricBuilder {
    /// Compare whole strings.
    pub fn with<M>(metric: M) -> StringStep<StringMetric>
    where
        M: Metric<str> + 'static,
    {
        StringStep::new(Arc::new(Similarity(metric)))
    }

    /// Compare token lists.
    pub fn with_list<M>(metric: M) -> CollectionStep<Vec<String>, StringMetric>
    where
        M: Metric<[String]> + 'static,
    {
        Self::with_tokens(metric)
    }

    /// Compare token sets.
    pub fn with_set<M>(metric: M) -> CollectionStep<AHashSet<String>, StringMetric>
    where
        M: Metric<AHashSet<String>> + 'static,
    {
        Self::with_tokens(metric)
    }

    /// Compare token multisets.
    pub fn with_multiset<M>(metric: M) -> CollectionStep<Multiset<String>, StringMetric>
    where
        M: Metric<Multiset<String>> + 'static,
    {
        Self::with_tokens(metric)
    }

    pub fn with_tokens<C, M>(metric: M) -> CollectionStep<C, StringMetric>
    where
        C: TokenCollection,
        M: Metric<C::Compared> + 'static,
    {
        CollectionStep::new(Arc::new(Similarity(metric)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{Identity, Jaccard, Level2, Levenshtein, SimonWhite};
    use crate::cache::{BoundedCache, UnboundedCache};
    use crate::simplifiers::{Simplifier, ToLowerCase};
    use crate::tokenizers::{QGram, Tokenizer, Whitespace};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.0001
    }

    fn lower() -> Arc<dyn Simplifier> {
        Arc::new(ToLowerCase)
    }

    fn whitespace() -> Arc<dyn Tokenizer> {
        Arc::new(Whitespace)
    }

    #[test]
    fn test_string_metric() {
        let metric = StringMetricBuilder::with(Levenshtein::new()).build();
        assert_eq!(metric.compare("test", "test").unwrap(), 1.0);
        assert!(approx_eq(metric.compare("test", "tent").unwrap(), 0.75));
    }

    #[test]
    fn test_string_metric_with_simplifiers() {
        let metric = StringMetricBuilder::with(Identity)
            .simplify(lower())
            .simplify(Arc::new(|s: &str| s.trim().to_string()))
            .build();
        assert_eq!(metric.compare("  ABC ", "abc").unwrap(), 1.0);

        let cached = StringMetricBuilder::with(Identity)
            .simplify(lower())
            .cache_strings(Arc::new(BoundedCache::<String>::new(8)))
            .build();
        assert_eq!(cached.compare("ABC", "abc").unwrap(), 1.0);
        assert_eq!(cached.compare("ABC", "abd").unwrap(), 0.0);
    }

    #[test]
    fn test_list_metric() {
        let metric = StringMetricBuilder::with_list(Level2::default())
            .tokenize(whitespace())
            .build();
        assert!(approx_eq(metric.compare("test string1", "test string2").unwrap(), 0.9286));
    }

    #[test]
    fn test_set_metric_with_every_step() {
        let metric = StringMetricBuilder::with_set(Jaccard)
            .simplify(lower())
            .simplify(lower())
            .cache_strings(Arc::new(UnboundedCache::<String>::new()))
            .tokenize(whitespace())
            .filter(|token: &str| token != "the")
            .transform(|token: &str| token.trim_end_matches('s').to_string())
            .cache_tokens(Arc::new(UnboundedCache::<AHashSet<String>>::new()))
            .build();

        assert_eq!(metric.compare("The cats", "the cat").unwrap(), 1.0);
        assert!(approx_eq(metric.compare("cats dogs", "cat birds").unwrap(), 1.0 / 3.0));
    }

    #[test]
    fn test_multiset_metric_with_chained_tokenizers() {
        let metric = StringMetricBuilder::with_multiset(SimonWhite)
            .tokenize(whitespace())
            .tokenize(Arc::new(QGram::new(2).unwrap()))
            .build();
        assert!(approx_eq(metric.compare("test string1", "test string2").unwrap(), 0.8889));
        assert_eq!(metric.compare("", "").unwrap(), 1.0);
        assert_eq!(metric.compare("abc", "").unwrap(), 0.0);
    }

    #[test]
    fn test_metric_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StringMetric>();
    }
}
