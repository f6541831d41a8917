//! Distance pipelines.

use std::sync::Arc;

use ahash::AHashSet;

use super::pipeline::{CollectionStep, Dissimilarity, Pipeline, StringStep};
use super::TokenCollection;
use crate::algorithms::Distance;
use crate::error::Result;
use crate::multiset::Multiset;

/// A built distance pipeline.
#[derive(Clone)]
pub struct StringDistance {
    pipeline: Pipeline,
}

impl StringDistance {
    pub fn distance(&self, a: &str, b: &str) -> Result<f64> {
        self.pipeline.evaluate(a, b)
    }
}

impl From<Pipeline> for StringDistance {
    fn from(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}

/// Entry points for assembling a [`StringDistance`].
pub struct StringDistanceBuilder;

impl StringDistanceBuilder {
    pub fn with<D>(distance: D) -> StringStep<StringDistance>
    where
        D: Distance<str> + 'static,
    {
        StringStep::new(Arc::new(Dissimilarity(distance)))
    }

    pub fn with_list<D>(distance: D) -> CollectionStep<Vec<String>, StringDistance>
    where
        D: Distance<[String]> + 'static,
    {
        Self::with_tokens(distance)
    }

    pub fn with_set<D>(distance: D) -> CollectionStep<AHashSet<String>, StringDistance>
    where
        D: Distance<AHashSet<String>> + 'static,
    {
        Self::with_tokens(distance)
    }

    pub fn with_multiset<D>(distance: D) -> CollectionStep<Multiset<String>, StringDistance>
    where
        D: Distance<Multiset<String>> + 'static,
    {
        Self::with_tokens(distance)
    }

    pub fn with_tokens<C, D>(distance: D) -> CollectionStep<C, StringDistance>
    where
        C: TokenCollection,
        D: Distance<C::Compared> + 'static,
    {
        CollectionStep::new(Arc::new(Dissimilarity(distance)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{BlockDistance, DamerauLevenshtein, EuclideanDistance, Identity};
    use crate::builders::CachingListTokenizer;
    use crate::cache::BoundedCache;
    use crate::error::SimilarityError;
    use crate::simplifiers::ToLowerCase;
    use crate::tokenizers::{QGramExtended, Whitespace};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.0001
    }

    #[test]
    fn test_string_distance() {
        let distance = StringDistanceBuilder::with(DamerauLevenshtein::new())
            .simplify(Arc::new(ToLowerCase))
            .build();
        assert_eq!(distance.distance("CA", "ac").unwrap(), 1.0);
        assert_eq!(distance.distance("", "").unwrap(), 0.0);
    }

    #[test]
    fn test_multiset_distances() {
        let euclidean = StringDistanceBuilder::with_multiset(EuclideanDistance)
            .tokenize(Arc::new(Whitespace))
            .build();
        assert!(approx_eq(
            euclidean.distance("test string1", "test string2").unwrap(),
            2f64.sqrt()
        ));

        let block = StringDistanceBuilder::with_multiset(BlockDistance)
            .tokenize(Arc::new(QGramExtended::new(3).unwrap()))
            .cache_tokens(Arc::new(BoundedCache::<Multiset<String>>::new(8)))
            .build();
        assert_eq!(block.distance("test string1", "test string2").unwrap(), 6.0);
        assert_eq!(block.distance("test", "test").unwrap(), 0.0);
    }

    #[test]
    fn test_shape_errors_surface() {
        let list_only = CachingListTokenizer::new(
            Arc::new(Whitespace),
            Arc::new(BoundedCache::<Vec<String>>::new(8)),
        );
        let distance = StringDistanceBuilder::with_set(Identity)
            .tokenize(Arc::new(list_only))
            .build();

        // A list-only caching tokenizer cannot feed a set comparator
        assert!(matches!(
            distance.distance("a", "b"),
            Err(SimilarityError::UnsupportedShape { .. })
        ));
    }
}
