//! Single-edit correction over a dictionary trie.
//!
//! The [`Transducer`] walks the dictionary with an explicit stack of search
//! states, the way a Levenshtein automaton of degree one would, and reports
//! whether a query is stored, one edit away from stored words, or neither.
//!
//! Supported edits are insertion, deletion, substitution and transposition
//! of two adjacent characters.

mod correction;
mod query;
mod state;

pub use correction::{Buckets, Correction};

use crate::dictionary::Dictionary;
use query::Search;
use smallvec::SmallVec;

/// Correction engine bound to one dictionary.
///
/// The transducer keeps no per-query state: every call to
/// [`correct`](Self::correct) owns its own worklist and buckets, so one
/// instance can serve concurrent queries when `D` is `Sync`.
///
/// # Example
///
/// ```rust
/// use autocorrect::prelude::*;
///
/// let dict = RadixTrie::from_terms(["cat", "cats", "cot"]);
/// let transducer = Transducer::new(dict);
///
/// assert_eq!(transducer.correct("cat"), Correction::Exact("cat".to_string()));
/// assert_eq!(
///     transducer.correct("ct"),
///     Correction::Suggestions(vec!["cat".to_string(), "cot".to_string()])
/// );
/// assert_eq!(transducer.correct("dog"), Correction::NoMatch);
/// ```
#[derive(Clone, Debug)]
pub struct Transducer<D: Dictionary> {
    dictionary: D,
}

impl<D: Dictionary> Transducer<D> {
    /// Create a new transducer over a fully built dictionary
    pub fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    /// Get a reference to the underlying dictionary
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Extract the underlying dictionary, consuming the transducer.
    #[inline]
    pub fn into_inner(self) -> D {
        self.dictionary
    }

    /// Run the traversal and return the raw distance buckets.
    pub fn buckets(&self, query: &str) -> Buckets {
        let query: SmallVec<[char; 32]> = query.chars().collect();
        Search::new(self.dictionary.root(), &query).run()
    }

    /// Classify `query` as an exact match, a set of suggestions, or no match.
    ///
    /// The query is compared as given; callers normalize case beforehand.
    pub fn correct(&self, query: &str) -> Correction {
        Correction::from(self.buckets(query))
    }
}
