//! Error types shared by every stage of a comparison pipeline.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Error raised by an external cache implementation.
pub type CacheError = Box<dyn StdError + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = SimilarityError> = std::result::Result<T, E>;

/// Token collection shape a tokenizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    List,
    Set,
    Multiset,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::List => "list",
            Shape::Set => "set",
            Shape::Multiset => "multiset",
        })
    }
}

/// Errors that can occur while building or running a comparison
#[derive(Error, Debug)]
pub enum SimilarityError {
    /// A configuration value or argument violated a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A tokenizer was asked for a collection shape it cannot produce
    #[error("Tokenizer '{tokenizer}' does not support {shape} output")]
    UnsupportedShape {
        tokenizer: &'static str,
        shape: Shape,
    },

    /// The cache backing a caching decorator failed for this key
    #[error("Cache failure for key {key:?}")]
    Cache {
        key: String,
        #[source]
        source: CacheError,
    },
}

impl SimilarityError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SimilarityError::InvalidArgument(message.into())
    }
}
