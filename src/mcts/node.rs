//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (NodeId): the tree
//! owns every node, and a child refers back to its parent by index for
//! backpropagation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rules::RulesEngine;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree: one state snapshot plus search statistics.
#[derive(Clone, Debug)]
pub struct MCTSNode<E: RulesEngine> {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Move that led here from the parent (None for root).
    pub mv: Option<E::Move>,

    /// State after `mv`.
    pub state: E,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Total visits to this node.
    pub visits: u32,

    /// Accumulated reward (wins for the root's player).
    pub wins: f64,

    /// Expanded children in expansion order.
    pub children: SmallVec<[NodeId; 8]>,

    /// Legal moves not yet expanded, computed once at construction.
    pub unexplored: Vec<E::Move>,
}

impl<E: RulesEngine> MCTSNode<E> {
    pub fn new(state: E, parent: NodeId, mv: Option<E::Move>, depth: u16) -> Self {
        let unexplored = state.legal_moves();
        Self {
            parent,
            mv,
            state,
            depth,
            visits: 0,
            wins: 0.0,
            children: SmallVec::new(),
            unexplored,
        }
    }

    pub fn root(state: E) -> Self {
        Self::new(state, NodeId::NONE, None, 0)
    }

    /// Mean reward per visit (0 when unvisited).
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f64
        }
    }

    #[must_use]
    pub fn has_unexplored(&self) -> bool {
        !self.unexplored.is_empty()
    }

    /// No untried moves left and at least one child.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.unexplored.is_empty() && !self.children.is_empty()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}
