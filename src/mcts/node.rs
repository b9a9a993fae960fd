//! MCTS node structure.
//!
//! Nodes live in the `MCTSTree` arena and refer to each other by `NodeId`.
//! The parent link is only used to walk upward during backpropagation.

use smallvec::SmallVec;

use crate::core::{Action, GameRng, PlayerId, PlayerMap};
use crate::rules::GameState;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
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

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
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

/// A node in the MCTS tree.
///
/// The position is fixed at creation; search only updates the statistics
/// and the expansion bookkeeping.
#[derive(Clone, Debug)]
pub struct MCTSNode {
    state: GameState,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Action on the edge from the parent (None for root).
    pub action: Option<Action>,

    /// Position of `action` in the parent's canonical legal action list.
    /// Breaks ties between equally scored siblings.
    pub action_index: usize,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Expanded children, in expansion order.
    pub children: SmallVec<[NodeId; 8]>,

    /// Legal actions not yet expanded, paired with their canonical index.
    /// Popped from the back.
    untried: Vec<(usize, Action)>,

    /// Times this node was on a backpropagation path.
    pub visits: u32,

    /// Reward accumulated per rollout winner.
    pub tally: PlayerMap<f64>,
}

impl MCTSNode {
    /// Create a root node.
    pub fn root(state: GameState, rng: &mut GameRng) -> Self {
        Self::new(state, NodeId::NONE, None, 0, 0, rng)
    }

    /// Create a child reached from `parent` by `action`.
    pub fn child(
        state: GameState,
        parent: NodeId,
        action: Action,
        action_index: usize,
        depth: u16,
        rng: &mut GameRng,
    ) -> Self {
        Self::new(state, parent, Some(action), action_index, depth, rng)
    }

    fn new(
        state: GameState,
        parent: NodeId,
        action: Option<Action>,
        action_index: usize,
        depth: u16,
        rng: &mut GameRng,
    ) -> Self {
        let mut untried: Vec<(usize, Action)> =
            state.legal_actions().into_iter().enumerate().collect();
        rng.shuffle(&mut untried);

        Self {
            state,
            parent,
            action,
            action_index,
            depth,
            children: SmallVec::new(),
            untried,
            visits: 0,
            tally: PlayerMap::default(),
        }
    }

    /// The position this node represents.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Win-minus-loss tally from the match player's perspective.
    #[must_use]
    pub fn q(&self) -> f64 {
        let me = self.state.match_player();
        self.tally[me] - self.tally[me.opponent()]
    }

    /// `q / n`, or 0 for an unvisited node.
    #[must_use]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.q() / f64::from(self.visits)
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_game_over()
    }

    /// Check if every legal action has a child.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Number of legal actions not yet expanded.
    #[must_use]
    pub fn untried_count(&self) -> usize {
        self.untried.len()
    }

    /// Take the next unexpanded action.
    pub fn pop_untried(&mut self) -> Option<(usize, Action)> {
        self.untried.pop()
    }

    /// Record one rollout result.
    pub fn record(&mut self, winner: PlayerId, reward: f64) {
        self.visits += 1;
        self.tally[winner] += reward;
    }
}
