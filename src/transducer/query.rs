//! Worklist traversal emulating a Levenshtein automaton of degree one.
//!
//! Every state on the stack is one alignment of a query prefix against a
//! trie path. Matching characters keep a single state alive; the first
//! mismatch fans out into the four single-edit explanations, after which
//! the path can only survive on exact matches. Work per query is therefore
//! bounded by the trie fan-out times the query length.

use super::correction::Buckets;
use super::state::{Edit, SearchState, MAX_DISTANCE};
use crate::dictionary::DictionaryNode;
use log::trace;

/// Single-use traversal of one query over one dictionary.
pub(crate) struct Search<'q, N: DictionaryNode> {
    stack: Vec<SearchState<N>>,
    query: &'q [char],
    buckets: Buckets,
}

impl<'q, N: DictionaryNode> Search<'q, N> {
    /// Seed the worklist with the children of `root`
    pub(crate) fn new(root: N, query: &'q [char]) -> Self {
        let stack = root.children().map(SearchState::start).collect();
        Self {
            stack,
            query,
            buckets: Buckets::new(),
        }
    }

    /// Drain the worklist and return the filled buckets
    pub(crate) fn run(mut self) -> Buckets {
        while let Some(state) = self.stack.pop() {
            if state.node.is_final() {
                self.record_terminal(&state);
            }

            if state.edge_remaining() == 0 {
                self.expand(&state);
                continue;
            }

            if state.query_pos == self.query.len() {
                continue;
            }

            self.compare(&state);
        }

        trace!(
            "query {:?}: exact={:?}, {} near",
            self.query.iter().collect::<String>(),
            self.buckets.exact(),
            self.buckets.near_len()
        );
        self.buckets
    }

    /// Classify a state sitting on a final node.
    ///
    /// Besides full alignments, a stored word one character shorter or longer
    /// than an otherwise matching query counts as a near match.
    fn record_terminal(&mut self, state: &SearchState<N>) {
        let query_left = self.query.len() - state.query_pos;
        let edge_left = state.edge_remaining();

        let distance = match (state.distance, query_left, edge_left) {
            (0, 0, 0) => 0,
            (MAX_DISTANCE, 0, 0) => MAX_DISTANCE,
            (0, 1, 0) | (0, 0, 1) => MAX_DISTANCE,
            _ => return,
        };

        if let Some(term) = state.node.term() {
            self.buckets.record(distance, term);
        }
    }

    fn expand(&mut self, state: &SearchState<N>) {
        for child in state.node.children() {
            self.stack.push(state.descend(child));
        }
    }

    fn compare(&mut self, state: &SearchState<N>) {
        let query_char = self.query[state.query_pos];
        let edge_char = state.node.label()[state.edge_pos];

        // A pending symbol means the previous step consumed a mismatched pair;
        // only the swapped pair may follow.
        if let Some(pending) = state.pending {
            if self.query[state.query_pos - 1] == edge_char && query_char == pending {
                self.stack.push(state.advance());
            }
            return;
        }

        if query_char == edge_char {
            self.stack.push(state.advance());
        } else if state.distance < MAX_DISTANCE {
            for edit in Edit::ALL {
                self.stack.push(state.branch(edit, edge_char));
            }
        }
    }
}
