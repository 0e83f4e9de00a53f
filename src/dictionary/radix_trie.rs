//! Edge-compressed prefix tree (radix trie).
//!
//! Every edge carries a label of one or more characters, so chains of
//! single-child nodes collapse into one edge. Nodes live in a `Vec` and
//! reference their children by index; ownership flows strictly from parent
//! to child and there are no back pointers.

use crate::dictionary::error::{DictionaryError, Result};
use crate::dictionary::iterator::TermIterator;
use crate::dictionary::{Dictionary, DictionaryNode};
use log::debug;
use smallvec::SmallVec;
use std::fmt;

const ROOT: usize = 0;

#[derive(Clone, Debug, Default)]
struct Node {
    label: SmallVec<[char; 8]>,
    // Set only on terminal nodes
    term: Option<Box<str>>,
    // Sorted by the first character of the child's label
    edges: SmallVec<[(char, usize); 4]>,
}

impl Node {
    fn leaf(label: &[char], term: &str) -> Self {
        Node {
            label: SmallVec::from_slice(label),
            term: Some(term.into()),
            edges: SmallVec::new(),
        }
    }
}

/// Radix trie holding the correction vocabulary.
///
/// The trie is built once through [`insert`](Self::insert) and then only
/// read. It owns no interior mutability, so a built trie is `Send + Sync`
/// and can be queried from many threads at once. Use
/// [`SharedDictionary`](crate::dictionary::SharedDictionary) when the
/// vocabulary has to change while queries are running.
///
/// # Complexity
///
/// Insertion costs O(m) in the length of the matched prefix. Each node keeps
/// its children sorted by first character, so picking an edge is a binary
/// search over the fan-out.
///
/// # Example
///
/// ```rust
/// use autocorrect::dictionary::RadixTrie;
///
/// let trie = RadixTrie::from_terms(["cat", "cats", "cot"]);
/// assert_eq!(trie.len(), 3);
/// assert!(trie.contains("cats"));
/// assert!(!trie.contains("ca"));
/// ```
#[derive(Clone, Debug)]
pub struct RadixTrie {
    nodes: Vec<Node>,
    term_count: usize,
}

impl RadixTrie {
    /// Create a new empty trie
    pub fn new() -> Self {
        RadixTrie {
            nodes: vec![Node::default()],
            term_count: 0,
        }
    }

    /// Create a trie from an iterator of terms.
    ///
    /// Empty terms are skipped. Duplicates are stored once.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for term in terms {
            if let Err(DictionaryError::EmptyTerm) = trie.insert(term.as_ref()) {
                debug!("skipping empty term");
            }
        }
        debug!(
            "built radix trie: {} terms, {} nodes",
            trie.term_count,
            trie.node_count()
        );
        trie
    }

    /// Insert a term into the trie.
    ///
    /// Returns `Ok(true)` if the term was newly inserted and `Ok(false)` if it
    /// was already present.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::EmptyTerm`] for the empty string.
    pub fn insert(&mut self, term: &str) -> Result<bool> {
        if term.is_empty() {
            return Err(DictionaryError::EmptyTerm);
        }

        let chars: SmallVec<[char; 32]> = term.chars().collect();
        let mut node = ROOT;
        let mut rest: &[char] = &chars;

        // `rest` is never empty at the top of the loop.
        loop {
            let first = rest[0];
            let pos = match self.nodes[node]
                .edges
                .binary_search_by_key(&first, |(c, _)| *c)
            {
                Ok(pos) => pos,
                Err(slot) => {
                    let leaf = self.push(Node::leaf(rest, term));
                    self.nodes[node].edges.insert(slot, (first, leaf));
                    self.term_count += 1;
                    return Ok(true);
                }
            };

            let child = self.nodes[node].edges[pos].1;
            let label_len = self.nodes[child].label.len();
            let shared = common_prefix_len(&self.nodes[child].label, rest);

            let next = if shared == label_len {
                child
            } else {
                self.split_edge(node, pos, shared)
            };

            if shared == rest.len() {
                return Ok(self.mark_final(next, term));
            }
            node = next;
            rest = &rest[shared..];
        }
    }

    /// Check if a term is stored in the trie
    pub fn contains(&self, term: &str) -> bool {
        let chars: SmallVec<[char; 32]> = term.chars().collect();
        let mut node = ROOT;
        let mut rest: &[char] = &chars;

        while let Some(&first) = rest.first() {
            let Some(child) = self.child(node, first) else {
                return false;
            };
            let label = &self.nodes[child].label;
            if !rest.starts_with(label) {
                return false;
            }
            rest = &rest[label.len()..];
            node = child;
        }

        self.nodes[node].term.is_some()
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.term_count
    }

    /// Check if the trie holds no terms
    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Number of nodes below the root
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Iterate over all terms in lexicographic order
    pub fn terms(&self) -> TermIterator<RadixNode<'_>> {
        TermIterator::new(self.root())
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn child(&self, node: usize, first: char) -> Option<usize> {
        let edges = &self.nodes[node].edges;
        edges
            .binary_search_by_key(&first, |(c, _)| *c)
            .ok()
            .map(|pos| edges[pos].1)
    }

    fn mark_final(&mut self, node: usize, term: &str) -> bool {
        let slot = &mut self.nodes[node].term;
        if slot.is_some() {
            return false;
        }
        *slot = Some(term.into());
        self.term_count += 1;
        true
    }

    /// Split the `pos`-th edge of `parent` after `at` label characters.
    ///
    /// The new intermediate node takes the first `at` characters and adopts
    /// the original child, which keeps the rest of its label. The first
    /// character of the parent's edge is unchanged, so edge order holds.
    fn split_edge(&mut self, parent: usize, pos: usize, at: usize) -> usize {
        let child = self.nodes[parent].edges[pos].1;
        let suffix: SmallVec<[char; 8]> = SmallVec::from_slice(&self.nodes[child].label[at..]);
        let prefix: SmallVec<[char; 8]> = SmallVec::from_slice(&self.nodes[child].label[..at]);

        let mut edges = SmallVec::new();
        edges.push((suffix[0], child));
        let middle = self.push(Node {
            label: prefix,
            term: None,
            edges,
        });

        self.nodes[child].label = suffix;
        self.nodes[parent].edges[pos].1 = middle;
        middle
    }
}

fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl Default for RadixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RadixTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl Dictionary for RadixTrie {
    type Node<'a> = RadixNode<'a>;

    fn root(&self) -> Self::Node<'_> {
        RadixNode {
            trie: self,
            index: ROOT,
        }
    }
}

/// Borrowed handle to one node of a [`RadixTrie`].
#[derive(Clone, Copy)]
pub struct RadixNode<'a> {
    trie: &'a RadixTrie,
    index: usize,
}

impl<'a> RadixNode<'a> {
    fn node(&self) -> &'a Node {
        &self.trie.nodes[self.index]
    }
}

impl DictionaryNode for RadixNode<'_> {
    fn label(&self) -> &[char] {
        &self.node().label
    }

    fn is_final(&self) -> bool {
        self.node().term.is_some()
    }

    fn term(&self) -> Option<&str> {
        self.node().term.as_deref()
    }

    fn children(&self) -> Box<dyn Iterator<Item = Self> + '_> {
        let trie = self.trie;
        Box::new(
            self.node()
                .edges
                .iter()
                .map(move |&(_, index)| RadixNode { trie, index }),
        )
    }
}

impl fmt::Debug for RadixNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixNode")
            .field("index", &self.index)
            .field("label", &self.label().iter().collect::<String>())
            .field("term", &self.term())
            .finish()
    }
}
