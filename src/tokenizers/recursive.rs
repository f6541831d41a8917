//! Recursive tokenizer chains.

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;

use super::{Composition, Tokenizer};
use crate::error::{Result, SimilarityError};
use crate::multiset::Multiset;

/// Applies each stage to every token produced by the stages before it.
///
/// `Recursive[Whitespace, QGram(2)]` splits on whitespace and then breaks
/// every word into bigrams. Once an intermediate stage yields no tokens the
/// remaining stages are skipped.
#[derive(Clone)]
pub struct Recursive {
    stages: Vec<Arc<dyn Tokenizer>>,
}

impl Recursive {
    pub fn new(stages: Vec<Arc<dyn Tokenizer>>) -> Result<Self> {
        if stages.is_empty() {
            return Err(SimilarityError::invalid(
                "a recursive tokenizer needs at least one stage",
            ));
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Arc<dyn Tokenizer>] {
        &self.stages
    }

    /// Run every stage but the last, returning the tokens it should see.
    fn leading_tokens(&self, input: &str) -> Result<Vec<String>> {
        let (_, leading) = self.split_last();
        let mut tokens = vec![input.to_owned()];
        for stage in leading {
            let mut next = Vec::with_capacity(tokens.len());
            for token in &tokens {
                next.extend(stage.tokenize_to_list(token)?);
            }
            tokens = next;
            if tokens.is_empty() {
                break;
            }
        }
        Ok(tokens)
    }

    fn split_last(&self) -> (&Arc<dyn Tokenizer>, &[Arc<dyn Tokenizer>]) {
        match self.stages.split_last() {
            Some(split) => split,
            // Constructors reject empty stage lists
            None => unreachable!("recursive tokenizer without stages"),
        }
    }
}

impl fmt::Debug for Recursive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recursive")
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl Tokenizer for Recursive {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        let leading = self.leading_tokens(input)?;
        let (last, _) = self.split_last();
        let mut tokens = Vec::with_capacity(leading.len());
        for token in &leading {
            tokens.extend(last.tokenize_to_list(token)?);
        }
        Ok(tokens)
    }

    fn tokenize_to_set(&self, input: &str) -> Result<AHashSet<String>> {
        let leading = self.leading_tokens(input)?;
        let (last, _) = self.split_last();
        let mut set = AHashSet::new();
        for token in &leading {
            set.extend(last.tokenize_to_set(token)?);
        }
        Ok(set)
    }

    fn tokenize_to_multiset(&self, input: &str) -> Result<Multiset<String>> {
        let leading = self.leading_tokens(input)?;
        let (last, _) = self.split_last();
        let mut bag = Multiset::new();
        for token in &leading {
            for (value, count) in last.tokenize_to_multiset(token)?.iter() {
                bag.insert_many(value.clone(), count);
            }
        }
        Ok(bag)
    }

    fn composition(&self) -> Composition<'_> {
        Composition::Recursive(self)
    }
}

/// Chain tokenizers into a [`Recursive`] tokenizer.
///
/// Nested recursive tokenizers are spliced in place and a single stage is
/// returned unchanged. An empty list is an error.
pub fn chain<I>(stages: I) -> Result<Arc<dyn Tokenizer>>
where
    I: IntoIterator<Item = Arc<dyn Tokenizer>>,
{
    let mut stages: Vec<Arc<dyn Tokenizer>> = stages.into_iter().collect();
    match stages.len() {
        0 => Err(SimilarityError::invalid("cannot chain zero tokenizers")),
        1 => Ok(stages.remove(0)),
        _ => Ok(Arc::new(Recursive {
            stages: flatten(stages),
        })),
    }
}

/// Chain two tokenizers, flattening either side.
pub(crate) fn chain_pair(first: Arc<dyn Tokenizer>, second: Arc<dyn Tokenizer>) -> Arc<dyn Tokenizer> {
    Arc::new(Recursive {
        stages: flatten(vec![first, second]),
    })
}

fn flatten(stages: Vec<Arc<dyn Tokenizer>>) -> Vec<Arc<dyn Tokenizer>> {
    let mut flat = Vec::with_capacity(stages.len());
    for stage in stages {
        match stage.composition() {
            Composition::Recursive(nested) => flat.extend(nested.stages.iter().cloned()),
            _ => flat.push(stage),
        }
    }
    flat
}
