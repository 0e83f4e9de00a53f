//! Swappable dictionary snapshots for long-running services.
//!
//! A [`RadixTrie`] is never mutated once queries start. When the vocabulary
//! changes, a new trie is built off to the side and swapped in; queries that
//! already hold the previous snapshot finish against it undisturbed.

use crate::dictionary::{Dictionary, RadixTrie};
use crate::transducer::Transducer;
use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;

/// Single-writer, multiple-reader handle to the active dictionary.
///
/// The lock is held only long enough to clone or replace an `Arc`, never for
/// the duration of a query.
///
/// # Example
///
/// ```rust
/// use autocorrect::dictionary::SharedDictionary;
/// use autocorrect::transducer::Correction;
///
/// let shared = SharedDictionary::from_terms(["cat"]);
/// let before = shared.transducer();
///
/// shared.rebuild(["dog"]);
///
/// assert_eq!(before.correct("cat"), Correction::Exact("cat".to_string()));
/// assert_eq!(shared.transducer().correct("cat"), Correction::NoMatch);
/// ```
#[derive(Debug, Default)]
pub struct SharedDictionary {
    current: RwLock<Arc<RadixTrie>>,
}

impl SharedDictionary {
    /// Wrap a fully built trie
    pub fn new(trie: RadixTrie) -> Self {
        Self {
            current: RwLock::new(Arc::new(trie)),
        }
    }

    /// Build a trie from terms and wrap it
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(RadixTrie::from_terms(terms))
    }

    /// Get the currently active trie
    pub fn snapshot(&self) -> Arc<RadixTrie> {
        Arc::clone(&self.current.read())
    }

    /// Create a transducer bound to the current snapshot
    pub fn transducer(&self) -> Transducer<Arc<RadixTrie>> {
        Transducer::new(self.snapshot())
    }

    /// Swap in a new trie, returning the one it replaces
    pub fn replace(&self, trie: RadixTrie) -> Arc<RadixTrie> {
        let terms = trie.len();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(trie));
        debug!(
            "swapped dictionary snapshot: {} -> {} terms",
            previous.len(),
            terms
        );
        previous
    }

    /// Build a new trie from `terms` and swap it in.
    ///
    /// Construction happens before the write lock is taken, so readers are
    /// only blocked for the pointer swap.
    pub fn rebuild<I, S>(&self, terms: I) -> Arc<RadixTrie>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.replace(RadixTrie::from_terms(terms))
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    type Node<'a> = D::Node<'a> where Self: 'a;

    fn root(&self) -> Self::Node<'_> {
        (**self).root()
    }
}
