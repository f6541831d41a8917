//! String simplifiers
//!
//! A simplifier normalizes a string before it is tokenized or compared.
//! Simplifiers compose with [`chain`], which flattens nested chains so a
//! pipeline always holds one flat list of stages.
//!
//! Any `Fn(&str) -> String + Send + Sync` closure is a simplifier.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, SimilarityError};

/// Total string-to-string transformation.
///
/// Built-in simplifiers never fail. Decorators such as
/// [`CachingSimplifier`](crate::builders::CachingSimplifier) can.
pub trait Simplifier: Send + Sync {
    fn simplify(&self, input: &str) -> Result<String>;

    /// Stages of this simplifier when it is a [`Chain`].
    #[doc(hidden)]
    fn as_chain(&self) -> Option<&Chain> {
        None
    }
}

impl<F> Simplifier for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn simplify(&self, input: &str) -> Result<String> {
        Ok(self(input))
    }
}

// ============================================================================
// Chains
// ============================================================================

/// Applies its stages in order.
///
/// An empty chain is the identity.
#[derive(Clone, Default)]
pub struct Chain {
    stages: Vec<Arc<dyn Simplifier>>,
}

impl Chain {
    pub fn stages(&self) -> &[Arc<dyn Simplifier>] {
        &self.stages
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl Simplifier for Chain {
    fn simplify(&self, input: &str) -> Result<String> {
        let mut output = input.to_owned();
        for stage in &self.stages {
            output = stage.simplify(&output)?;
        }
        Ok(output)
    }

    fn as_chain(&self) -> Option<&Chain> {
        Some(self)
    }
}

/// Compose simplifiers into one, applied left to right.
///
/// Nested chains are spliced into the result rather than wrapped, and a
/// single stage is returned unchanged.
///
/// ```
/// use std::sync::Arc;
/// use fuzzymetrics::simplifiers::{chain, Simplifier, ToLowerCase};
///
/// let lower: Arc<dyn Simplifier> = Arc::new(ToLowerCase);
/// assert!(Arc::ptr_eq(&chain([lower.clone()]), &lower));
/// ```
pub fn chain<I>(stages: I) -> Arc<dyn Simplifier>
where
    I: IntoIterator<Item = Arc<dyn Simplifier>>,
{
    let mut stages: Vec<Arc<dyn Simplifier>> = stages.into_iter().collect();
    if stages.len() == 1 {
        return stages.remove(0);
    }

    let mut flat = Vec::with_capacity(stages.len());
    for stage in stages {
        match stage.as_chain() {
            Some(nested) => flat.extend(nested.stages.iter().cloned()),
            None => flat.push(stage),
        }
    }
    Arc::new(Chain { stages: flat })
}

// ============================================================================
// Case and Unicode normalization
// ============================================================================

/// Lowercase using Unicode case mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToLowerCase;

impl Simplifier for ToLowerCase {
    fn simplify(&self, input: &str) -> Result<String> {
        Ok(input.to_lowercase())
    }
}

/// Uppercase using Unicode case mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToUpperCase;

impl Simplifier for ToUpperCase {
    fn simplify(&self, input: &str) -> Result<String> {
        Ok(input.to_uppercase())
    }
}

/// Unicode normalization form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Form {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

/// Apply a Unicode normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalize {
    pub form: Form,
}

impl Normalize {
    #[must_use]
    pub fn new(form: Form) -> Self {
        Self { form }
    }
}

impl Simplifier for Normalize {
    fn simplify(&self, input: &str) -> Result<String> {
        Ok(match self.form {
            Form::Nfc => input.nfc().collect(),
            Form::Nfd => input.nfd().collect(),
            Form::Nfkc => input.nfkc().collect(),
            Form::Nfkd => input.nfkd().collect(),
        })
    }
}

/// Strip diacritics by decomposing and dropping combining marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveDiacritics;

impl Simplifier for RemoveDiacritics {
    fn simplify(&self, input: &str) -> Result<String> {
        Ok(input.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect())
    }
}

// ============================================================================
// Regex replacement
// ============================================================================

/// Replace every match of a regular expression.
///
/// `replacement` supports `$name` / `${n}` group references.
#[derive(Debug, Clone)]
pub struct ReplaceAll {
    regex: Regex,
    replacement: String,
}

impl ReplaceAll {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SimilarityError::invalid(format!("invalid pattern {pattern:?}: {e}")))?;
        Ok(Self::from_regex(regex, replacement))
    }

    #[must_use]
    pub fn from_regex(regex: Regex, replacement: impl Into<String>) -> Self {
        Self {
            regex,
            replacement: replacement.into(),
        }
    }
}

impl Simplifier for ReplaceAll {
    fn simplify(&self, input: &str) -> Result<String> {
        Ok(self
            .regex
            .replace_all(input, self.replacement.as_str())
            .into_owned())
    }
}

fn builtin(pattern: &str, replacement: &str) -> ReplaceAll {
    // Only called with the literal patterns below
    match Regex::new(pattern) {
        Ok(regex) => ReplaceAll::from_regex(regex, replacement),
        Err(e) => unreachable!("built-in pattern {pattern:?} failed to compile: {e}"),
    }
}

/// Replace every non-word character with a space.
#[must_use]
pub fn replace_non_word() -> ReplaceAll {
    builtin(r"\W", " ")
}

/// Remove every run of non-word characters.
#[must_use]
pub fn remove_non_word() -> ReplaceAll {
    builtin(r"\W+", "")
}

/// Remove every match of `pattern`.
pub fn remove_all(pattern: &str) -> Result<ReplaceAll> {
    ReplaceAll::new(pattern, "")
}
