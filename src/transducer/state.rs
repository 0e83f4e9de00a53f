//! Search states of the single-edit traversal.

use crate::dictionary::DictionaryNode;

/// Edit budget of a query. Once spent, a path may only continue on exact
/// character matches.
pub(crate) const MAX_DISTANCE: u8 = 1;

/// The four ways a mismatch can be explained by one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edit {
    /// The query carries an extra character: consume query only.
    Deletion,
    /// The stored word carries a character the query lacks: consume edge only.
    Insertion,
    /// The mismatched pair counts as one replacement: consume both.
    Substitution,
    /// Consume both and remember the edge character, to be confirmed as a
    /// swap of adjacent characters on the next comparison.
    Transposition,
}

impl Edit {
    pub(crate) const ALL: [Edit; 4] = [
        Edit::Deletion,
        Edit::Insertion,
        Edit::Substitution,
        Edit::Transposition,
    ];
}

/// One point of the nondeterministic traversal.
///
/// `query_pos` counts query characters consumed so far, `edge_pos` counts
/// characters consumed from the label of `node`.
#[derive(Debug, Clone)]
pub(crate) struct SearchState<N> {
    pub(crate) node: N,
    pub(crate) query_pos: usize,
    pub(crate) edge_pos: usize,
    pub(crate) distance: u8,
    pub(crate) pending: Option<char>,
}

impl<N: DictionaryNode> SearchState<N> {
    /// State for a child edge of the root
    pub(crate) fn start(node: N) -> Self {
        SearchState {
            node,
            query_pos: 0,
            edge_pos: 0,
            distance: 0,
            pending: None,
        }
    }

    /// Enter `child` at the start of its label, carrying over the query
    /// position, distance and pending symbol.
    pub(crate) fn descend(&self, child: N) -> Self {
        SearchState {
            node: child,
            query_pos: self.query_pos,
            edge_pos: 0,
            distance: self.distance,
            pending: self.pending,
        }
    }

    /// Number of label characters left on the current edge
    pub(crate) fn edge_remaining(&self) -> usize {
        self.node.label().len() - self.edge_pos
    }

    /// Consume one character of both query and edge without spending budget.
    pub(crate) fn advance(&self) -> Self {
        SearchState {
            node: self.node.clone(),
            query_pos: self.query_pos + 1,
            edge_pos: self.edge_pos + 1,
            distance: self.distance,
            pending: None,
        }
    }

    /// Spend the edit budget on `edit`. `edge_char` is the label character at
    /// the current edge position.
    pub(crate) fn branch(&self, edit: Edit, edge_char: char) -> Self {
        let (query_step, edge_step, pending) = match edit {
            Edit::Deletion => (1, 0, None),
            Edit::Insertion => (0, 1, None),
            Edit::Substitution => (1, 1, None),
            Edit::Transposition => (1, 1, Some(edge_char)),
        };

        SearchState {
            node: self.node.clone(),
            query_pos: self.query_pos + query_step,
            edge_pos: self.edge_pos + edge_step,
            distance: MAX_DISTANCE,
            pending,
        }
    }
}
