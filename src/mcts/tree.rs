//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references: children are
//! owned by the arena, and each child points back to its parent by `NodeId`.

use super::config::MCTSConfig;
use super::node::{MCTSNode, NodeId};
use super::policy::SelectionPolicy;
use crate::rules::RulesEngine;

/// Arena-based MCTS tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// The root is always `NodeId(0)`.
#[derive(Clone, Debug)]
pub struct MCTSTree<E: RulesEngine> {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode<E>>,

    /// The root node ID.
    root: NodeId,
}

impl<E: RulesEngine> MCTSTree<E> {
    /// Create a new tree rooted at `state`.
    pub fn new(state: E) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: E, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode<E> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode<E> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode<E>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root_node(&self) -> &MCTSNode<E> {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode<E>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Child of `id` with the highest selection score.
    ///
    /// The first child in expansion order wins ties, so unvisited children
    /// are tried in the order they were expanded. Returns `None` for a
    /// childless node.
    pub fn select_child(
        &self,
        id: NodeId,
        policy: &dyn SelectionPolicy,
        config: &MCTSConfig,
    ) -> Option<NodeId> {
        let node = self.get(id);
        let mut best: Option<(NodeId, f64)> = None;

        for &child_id in &node.children {
            let child = self.get(child_id);
            let score = policy.score(node.visits, child.visits, child.wins, config);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }

        best.map(|(child_id, _)| child_id)
    }

    /// Expand one untried move of `id`: pop it from the end of the untried
    /// list, apply it to a copy of the node's state and attach the child.
    ///
    /// Returns `None` when nothing is left to expand.
    pub fn expand(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.get_mut(id);
        let mv = parent.unexplored.pop()?;
        let depth = parent.depth.saturating_add(1);

        let mut state = parent.state.clone();
        state.apply_move(mv);

        let child_id = self.alloc(MCTSNode::new(state, id, Some(mv), depth));
        self.get_mut(id).children.push(child_id);
        Some(child_id)
    }

    /// Add one visit and `reward` to `id` and every ancestor up to the root.
    ///
    /// The same reward flows all the way up: it always measures the root
    /// player's result.
    pub fn backpropagate(&mut self, id: NodeId, reward: f64) {
        let mut current = id;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.wins += reward;
            current = node.parent;
        }
    }

    /// Root child with the most visits (first in expansion order on ties).
    #[must_use]
    pub fn best_child_by_visits(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, u32)> = None;
        for &child_id in &self.root_node().children {
            let visits = self.get(child_id).visits;
            match best {
                Some((_, best_visits)) if visits <= best_visits => {}
                _ => best = Some((child_id, visits)),
            }
        }
        best.map(|(child_id, _)| child_id)
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let expanded_count = self.nodes.iter().filter(|n| !n.children.is_empty()).count();
        let unexplored_moves: usize = self.nodes.iter().map(|n| n.unexplored.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            expanded_count,
            unexplored_moves,
        }
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Nodes with at least one child.
    pub expanded_count: usize,

    /// Moves still waiting for expansion across the tree.
    pub unexplored_moves: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            self.node_count.saturating_sub(1) as f64 / self.expanded_count as f64
        }
    }
}
