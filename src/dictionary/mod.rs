//! Dictionary abstractions for the correction engine.
//!
//! The engine never touches a concrete trie directly: it walks nodes through
//! the [`Dictionary`] and [`DictionaryNode`] traits, which expose exactly what
//! an edge-labelled prefix tree offers (a label per node, a terminal flag, the
//! stored word and the outgoing children).

pub mod error;
pub mod iterator;
pub mod radix_trie;
pub mod shared;

pub use error::DictionaryError;
pub use iterator::TermIterator;
pub use radix_trie::{RadixNode, RadixTrie};
pub use shared::SharedDictionary;

/// Core dictionary abstraction for approximate string matching.
///
/// A dictionary is a collection of terms laid out as a tree of
/// edge-labelled nodes. Nodes borrow from the dictionary, so a query holds
/// the dictionary immutably for its whole duration.
pub trait Dictionary {
    /// The node type used for dictionary traversal
    type Node<'a>: DictionaryNode
    where
        Self: 'a;

    /// Get the root node of the dictionary.
    ///
    /// The root's label is empty and it is never final.
    fn root(&self) -> Self::Node<'_>;
}

/// Traversable dictionary node.
///
/// Each node is entered through an edge whose label may span several
/// characters. Outgoing labels of one node never share a first character.
pub trait DictionaryNode: Clone {
    /// The edge label leading into this node, one entry per character
    fn label(&self) -> &[char];

    /// Check if this node marks the end of a valid term
    fn is_final(&self) -> bool;

    /// The stored term, present only on final nodes
    fn term(&self) -> Option<&str>;

    /// Iterate over all children, ordered by the first character of their label
    fn children(&self) -> Box<dyn Iterator<Item = Self> + '_>;
}
