//! Error types for dictionary construction.

use thiserror::Error;

/// Errors that can occur while building a dictionary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The term is empty.
    ///
    /// The root of a trie spells the empty string and is never terminal, so
    /// an empty term has nowhere to live.
    #[error("Term is empty")]
    EmptyTerm,
}

/// A specialized `Result` type for dictionary operations.
pub type Result<T> = std::result::Result<T, DictionaryError>;
