//! Q-gram tokenizers
//!
//! A q-gram is a run of `q` consecutive characters. `"hello"` has the
//! 2-grams `he`, `el`, `ll`, `lo`. The extended variant pads the input so
//! the first and last characters appear in as many grams as the rest.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Tokenizer;
use crate::error::{Result, SimilarityError};

const DEFAULT_PADDING: char = '#';

/// Configuration for [`QGram`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QGramConfig {
    /// Gram length in characters
    pub q: usize,
    /// Drop inputs shorter than `q` instead of returning them whole
    pub filter: bool,
}

impl Default for QGramConfig {
    fn default() -> Self {
        Self { q: 2, filter: false }
    }
}

fn check_q(q: usize) -> Result<()> {
    if q == 0 {
        return Err(SimilarityError::invalid("q must be at least 1"));
    }
    Ok(())
}

/// Slide a window of `q` chars over `chars`.
///
/// Inputs shorter than `q` come back whole unless `filter` is set.
fn grams(chars: &[char], q: usize, filter: bool) -> Vec<String> {
    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() < q {
        return if filter {
            Vec::new()
        } else {
            vec![chars.iter().collect()]
        };
    }
    chars.windows(q).map(|w| w.iter().collect()).collect()
}

// ============================================================================
// QGram
// ============================================================================

/// Unpadded q-gram tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QGram {
    q: usize,
    filter: bool,
}

impl QGram {
    pub fn new(q: usize) -> Result<Self> {
        Self::from_config(QGramConfig { q, filter: false })
    }

    /// Like [`QGram::new`] but inputs shorter than `q` produce no tokens.
    pub fn with_filter(q: usize) -> Result<Self> {
        Self::from_config(QGramConfig { q, filter: true })
    }

    /// Unfiltered 2-grams.
    #[must_use]
    pub const fn bigrams() -> Self {
        Self { q: 2, filter: false }
    }

    pub fn from_config(config: QGramConfig) -> Result<Self> {
        check_q(config.q)?;
        Ok(Self {
            q: config.q,
            filter: config.filter,
        })
    }

    pub fn config(&self) -> QGramConfig {
        QGramConfig {
            q: self.q,
            filter: self.filter,
        }
    }

    pub fn q(&self) -> usize {
        self.q
    }

    pub fn is_filter(&self) -> bool {
        self.filter
    }
}

impl Tokenizer for QGram {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        let chars: SmallVec<[char; 64]> = input.chars().collect();
        Ok(grams(&chars, self.q, self.filter))
    }
}

// ============================================================================
// QGramExtended
// ============================================================================

/// Q-gram tokenizer over padded input.
///
/// By default both ends are padded with `q - 1` copies of `#`, so `"ab"`
/// with `q = 3` yields `##a`, `#ab`, `ab#`, `b##`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QGramExtended {
    q: usize,
    start_padding: String,
    end_padding: String,
}

impl QGramExtended {
    pub fn new(q: usize) -> Result<Self> {
        let pad = DEFAULT_PADDING.to_string();
        Self::with_padding(q, &pad, &pad)
    }

    /// 3-grams padded with `##` on both ends.
    #[must_use]
    pub fn trigrams() -> Self {
        let pad = DEFAULT_PADDING.to_string().repeat(2);
        Self {
            q: 3,
            start_padding: pad.clone(),
            end_padding: pad,
        }
    }

    /// Pad with `q - 1` copies of `start` before and of `end` after the input.
    pub fn with_padding(q: usize, start: &str, end: &str) -> Result<Self> {
        check_q(q)?;
        Ok(Self {
            q,
            start_padding: start.repeat(q - 1),
            end_padding: end.repeat(q - 1),
        })
    }

    pub fn q(&self) -> usize {
        self.q
    }

    pub fn start_padding(&self) -> &str {
        &self.start_padding
    }

    pub fn end_padding(&self) -> &str {
        &self.end_padding
    }
}

impl Tokenizer for QGramExtended {
    fn tokenize_to_list(&self, input: &str) -> Result<Vec<String>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let chars: SmallVec<[char; 64]> = self
            .start_padding
            .chars()
            .chain(input.chars())
            .chain(self.end_padding.chars())
            .collect();
        Ok(grams(&chars, self.q, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qgram() {
        let tokenizer = QGram::new(2).unwrap();
        assert_eq!(tokenizer.tokenize_to_list("hello").unwrap(), ["he", "el", "ll", "lo"]);
        assert_eq!(tokenizer.tokenize_to_list("h").unwrap(), ["h"]);
        assert!(tokenizer.tokenize_to_list("").unwrap().is_empty());
    }

    #[test]
    fn test_qgram_filter() {
        let tokenizer = QGram::with_filter(3).unwrap();
        assert!(tokenizer.is_filter());
        assert!(tokenizer.tokenize_to_list("ab").unwrap().is_empty());
        assert_eq!(tokenizer.tokenize_to_list("abc").unwrap(), ["abc"]);
    }

    #[test]
    fn test_qgram_multibyte() {
        let tokenizer = QGram::new(2).unwrap();
        assert_eq!(tokenizer.tokenize_to_list("añb").unwrap(), ["añ", "ñb"]);
    }

    #[test]
    fn test_zero_q_is_rejected() {
        assert!(QGram::new(0).is_err());
        assert!(QGramExtended::new(0).is_err());
    }

    #[test]
    fn test_qgram_extended() {
        let tokenizer = QGramExtended::new(3).unwrap();
        assert_eq!(tokenizer.start_padding(), "##");
        assert_eq!(tokenizer.end_padding(), "##");
        assert_eq!(
            tokenizer.tokenize_to_list("ab").unwrap(),
            ["##a", "#ab", "ab#", "b##"]
        );
        assert!(tokenizer.tokenize_to_list("").unwrap().is_empty());
    }

    #[test]
    fn test_shorthands() {
        assert_eq!(QGram::bigrams(), QGram::new(2).unwrap());
        assert_eq!(QGramExtended::trigrams(), QGramExtended::new(3).unwrap());
    }

    #[test]
    fn test_qgram_extended_custom_padding() {
        let tokenizer = QGramExtended::with_padding(3, "^", "$").unwrap();
        assert_eq!(tokenizer.start_padding(), "^^");
        assert_eq!(tokenizer.end_padding(), "$$");
        assert_eq!(tokenizer.tokenize_to_list("a").unwrap(), ["^^a", "^a$", "a$$"]);
    }

    #[test]
    fn test_qgram_config() {
        let config: QGramConfig = serde_json::from_str(r#"{"q": 3}"#).unwrap();
        assert_eq!(config, QGramConfig { q: 3, filter: false });

        let tokenizer = QGram::from_config(config).unwrap();
        assert_eq!(tokenizer.config(), config);
        assert!(QGram::from_config(QGramConfig { q: 0, filter: true }).is_err());
    }
}
