//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references; the parent
//! link of each node is a `NodeId`, so walking back to the root needs no
//! reference counting.

use super::node::{MCTSNode, NodeId};
use crate::core::{GameRng, PlayerId};
use crate::rules::GameState;

/// Arena-based MCTS tree.
#[derive(Clone, Debug)]
pub struct MCTSTree {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl MCTSTree {
    /// Create a new tree rooted at `state`.
    pub fn new(state: GameState, rng: &mut GameRng) -> Self {
        Self::with_capacity(state, rng, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: GameState, rng: &mut GameRng, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(state, rng));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    /// Expanded children of a node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &MCTSNode> {
        self.get(id).children.iter().map(move |&child| self.get(child))
    }

    /// Credit one rollout to every node from `leaf` up to the root.
    pub fn backpropagate(&mut self, leaf: NodeId, winner: PlayerId, reward: f64) {
        let mut current = leaf;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.record(winner, reward);
            current = node.parent;
        }
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let expanded_edges: usize = self.nodes.iter().map(|n| n.children.len()).sum();
        let untried_edges: usize = self.nodes.iter().map(|n| n.untried_count()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            total_edges: expanded_edges + untried_edges,
            expanded_edges,
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

    /// Legal actions across all nodes, expanded or not.
    pub total_edges: usize,

    /// Actions that have a child node.
    pub expanded_edges: usize,
}

impl TreeStats {
    /// Get the expansion ratio (expanded edges / total edges).
    #[must_use]
    pub fn expansion_ratio(&self) -> f64 {
        if self.total_edges == 0 {
            0.0
        } else {
            self.expanded_edges as f64 / self.total_edges as f64
        }
    }
}
