//! Depth-first iteration over stored terms.
//!
//! ```rust
//! use autocorrect::dictionary::RadixTrie;
//!
//! let trie = RadixTrie::from_terms(["cot", "cat", "cats"]);
//! let terms: Vec<String> = trie.terms().collect();
//! assert_eq!(terms, vec!["cat", "cats", "cot"]);
//! ```
//!
//! Terms are read straight from final nodes, so no path is rebuilt during
//! traversal.

use super::DictionaryNode;

/// Iterator over the terms of a dictionary, in lexicographic order.
///
/// Performs a pre-order depth-first traversal. Children are pushed in
/// reverse so the smallest edge is visited first, and a node's own term is
/// yielded before any term below it.
pub struct TermIterator<N: DictionaryNode> {
    stack: Vec<N>,
}

impl<N: DictionaryNode> TermIterator<N> {
    /// Create a new iterator starting from the given root node
    pub fn new(root: N) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push(root);
        Self { stack }
    }
}

impl<N: DictionaryNode> Iterator for TermIterator<N> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            let children: Vec<N> = node.children().collect();
            self.stack.extend(children.into_iter().rev());

            if let Some(term) = node.term() {
                return Some(term.to_owned());
            }
        }
        None
    }
}
