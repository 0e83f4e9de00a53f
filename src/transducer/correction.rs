//! Classification of a query against the dictionary.
//!
//! The traversal fills [`Buckets`] keyed by edit distance; [`Correction`]
//! is the decision over them that callers actually consume.

use std::collections::BTreeSet;

/// Words reached by one traversal, grouped by distance.
///
/// Distance 0 holds at most one word, the exact match. Distance 1 holds
/// every near match found, in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    exact: Option<String>,
    near: BTreeSet<String>,
}

impl Buckets {
    /// Create empty buckets
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `term` at `distance` (0 or 1).
    ///
    /// The first exact match wins; near matches are deduplicated.
    pub(crate) fn record(&mut self, distance: u8, term: &str) {
        if distance == 0 {
            if self.exact.is_none() {
                self.exact = Some(term.to_owned());
            }
        } else if !self.near.contains(term) {
            self.near.insert(term.to_owned());
        }
    }

    /// The exact match, if any
    pub fn exact(&self) -> Option<&str> {
        self.exact.as_deref()
    }

    /// Near matches in lexicographic order
    pub fn near(&self) -> impl Iterator<Item = &str> + '_ {
        self.near.iter().map(String::as_str)
    }

    /// Number of near matches
    pub fn near_len(&self) -> usize {
        self.near.len()
    }
}

/// Outcome of looking a query up in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    /// The query is stored verbatim
    Exact(String),
    /// Words one edit away, sorted and unique
    Suggestions(Vec<String>),
    /// Nothing within one edit
    NoMatch,
}

impl Correction {
    /// Check if the query was found verbatim
    pub fn is_exact(&self) -> bool {
        matches!(self, Correction::Exact(_))
    }

    /// Check if the query matched anything at all
    pub fn is_match(&self) -> bool {
        !matches!(self, Correction::NoMatch)
    }

    /// Suggested words; empty unless this is [`Correction::Suggestions`]
    pub fn suggestions(&self) -> &[String] {
        match self {
            Correction::Suggestions(words) => words,
            _ => &[],
        }
    }
}

impl From<Buckets> for Correction {
    fn from(buckets: Buckets) -> Self {
        match buckets.exact {
            Some(word) => Correction::Exact(word),
            None if !buckets.near.is_empty() => {
                Correction::Suggestions(buckets.near.into_iter().collect())
            }
            None => Correction::NoMatch,
        }
    }
}
