//! Tokenizers
//!
//! A tokenizer splits a string into tokens and can hand them back as an
//! ordered list, a set, or a multiset. Tokenizers compose:
//! - [`chain`] builds a [`Recursive`] tokenizer where each stage
//!   re-tokenizes the tokens of the previous one
//! - [`filter`] and [`transform`] decorate a tokenizer, fusing with an
//!   existing decorator of the same kind instead of nesting
//!
//! Any `Fn(&str) -> Vec<String> + Send + Sync` closure is a tokenizer.

use ahash::AHashSet;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Result, SimilarityError};
use crate::multiset::Multiset;

mod decorators;
mod qgram;
mod recursive;

pub use decorators::{filter, transform, Filter, Transform};
pub use qgram::{QGram, QGramConfig, QGramExtended};
pub use recursive::{chain, Recursive};
pub(crate) use recursive::chain_pair;

/// How a tokenizer is assembled from other tokenizers.
///
/// Used when composing, so chains and decorators can be flattened.
#[doc(hidden)]
pub enum Composition<'a> {
    Opaque,
    Recursive(&'a Recursive),
    Filter(&'a Filter),
    Transform(&'a Transform),
}

/// Splits a string into tokens.
///
/// Only `tokenize_to_list` is required; the set and multiset forms collect
/// it by default. A tokenizer bound to fewer shapes returns
/// [`SimilarityError::UnsupportedShape`] for the others.
pub trait Tokenizer: Send + Sync {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>>;

    fn tokenize_to_set(&self, input: &str) -> Result<AHashSet<String>> {
        Ok(self.tokenize_to_list(input)?.into_iter().collect())
    }

    fn tokenize_to_multiset(&self, input: &str) -> Result<Multiset<String>> {
        Ok(self.tokenize_to_list(input)?.into_iter().collect())
    }

    #[doc(hidden)]
    fn composition(&self) -> Composition<'_> {
        Composition::Opaque
    }
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        Ok(self(input))
    }
}

// ============================================================================
// Splitting tokenizers
// ============================================================================

/// Split on runs of Unicode whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Whitespace;

impl Tokenizer for Whitespace {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        Ok(input.split_whitespace().map(str::to_owned).collect())
    }
}

/// Split on matches of a regular expression, dropping empty pieces.
#[derive(Debug, Clone)]
pub struct Split {
    regex: Regex,
}

impl Split {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SimilarityError::invalid(format!("invalid pattern {pattern:?}: {e}")))?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Tokenizer for Split {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        Ok(self
            .regex
            .split(input)
            .filter(|piece| !piece.is_empty())
            .map(str::to_owned)
            .collect())
    }
}

/// Split into extended grapheme clusters.
///
/// Emoji sequences and base letters with combining marks stay one token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Graphemes;

impl Tokenizer for Graphemes {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        Ok(input.graphemes(true).map(str::to_owned).collect())
    }
}
