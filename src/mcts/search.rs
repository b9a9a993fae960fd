//! Core MCTS search algorithm.
//!
//! Each iteration walks down the tree with the selection policy, expands one
//! untried action, plays the match out at random from the new node, and
//! credits the rollout's winner on every node back up to the root. Rewards
//! are always measured from the root position's match player.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use tracing::{trace, Level};

use crate::core::{Action, GameRng, TrucoError};
use crate::rules::GameState;

use super::config::{FinalSelection, MCTSConfig};
use super::node::{MCTSNode, NodeId};
use super::policy::{RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Owns the configuration, the RNG, the policies, and the tree of the most
/// recent search (kept for inspection).
pub struct MCTSSearch {
    /// Search configuration.
    config: MCTSConfig,

    /// RNG for expansion order and rollouts.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy>,

    /// Tree built by the last call to `search`.
    tree: Option<MCTSTree>,

    /// Search statistics.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a new MCTS search context.
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomSimulation),
            tree: None,
            stats: SearchStats::default(),
        }
    }

    /// Choose an action for the player to move in `state`.
    ///
    /// Fails with `GameOver` on a finished match. A position with a single
    /// legal action returns it without searching. At least one iteration
    /// always runs, whatever the configured budget.
    pub fn search(&mut self, state: &GameState) -> Result<Action, TrucoError> {
        let start = Instant::now();
        self.stats.reset();

        if state.is_game_over() {
            return Err(TrucoError::GameOver);
        }

        let legal = state.legal_actions();
        match legal.as_slice() {
            [] => {
                return Err(TrucoError::Precondition(
                    "live position has no legal actions".into(),
                ))
            }
            [only] => {
                self.tree = None;
                return Ok(*only);
            }
            _ => {}
        }

        self.stats.searches = 1;
        let iterations = self.config.iterations.max(1);
        let capacity = self.config.max_nodes.min(iterations as usize + 1);
        let mut tree = MCTSTree::with_capacity(state.clone(), &mut self.rng, capacity);
        let deadline = self
            .config
            .time_budget_ms
            .map(|ms| start + Duration::from_millis(ms));

        for _ in 0..iterations {
            self.iteration(&mut tree)?;
            self.stats.iterations += 1;

            // Check node limit
            if tree.len() >= self.config.max_nodes {
                break;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let action = self.best_action(&tree).ok_or_else(|| {
            TrucoError::Precondition("search finished without expanding the root".into())
        })?;

        if tracing::enabled!(Level::TRACE) {
            trace!(
                iterations = self.stats.iterations,
                nodes = tree.len(),
                expansion = tree.stats().expansion_ratio(),
                iterations_per_second = self.stats.iterations_per_second(),
                action = %action,
                "MCTS search complete"
            );
        }

        self.tree = Some(tree);
        Ok(action)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, tree: &mut MCTSTree) -> Result<(), TrucoError> {
        // === SELECTION ===
        let mut current = tree.root();
        loop {
            let node = tree.get(current);
            if node.is_terminal() || !node.is_fully_expanded() {
                break;
            }
            current = self
                .selection
                .select(tree, current, &self.config)
                .ok_or_else(|| {
                    TrucoError::Precondition("expanded node has no children".into())
                })?;
        }

        // === EXPANSION ===
        let leaf = if tree.get(current).is_terminal() {
            self.stats.terminal_hits += 1;
            current
        } else {
            self.expand(tree, current)?
        };

        // === SIMULATION ===
        let result = match tree.get(leaf).state().game_result() {
            Some(result) => result,
            None => {
                self.stats.simulations += 1;
                let mut rollout_rng = self.rng.fork();
                self.simulation.simulate(tree.get(leaf).state(), &mut rollout_rng)?
            }
        };

        // === BACKPROPAGATION ===
        tree.backpropagate(leaf, result.winner, self.config.reward_per_win);
        Ok(())
    }

    /// Add a child for one untried action of `parent`.
    fn expand(&mut self, tree: &mut MCTSTree, parent: NodeId) -> Result<NodeId, TrucoError> {
        let (index, action) = tree
            .get_mut(parent)
            .pop_untried()
            .ok_or_else(|| TrucoError::Precondition("no untried action to expand".into()))?;

        let state = tree.get(parent).state().do_action(&action)?;
        let depth = tree.get(parent).depth + 1;
        let child = MCTSNode::child(state, parent, action, index, depth, &mut self.rng);
        let id = tree.alloc(child);
        tree.get_mut(parent).children.push(id);

        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        Ok(id)
    }

    /// Pick the final action among the root's children.
    fn best_action(&self, tree: &MCTSTree) -> Option<Action> {
        let by_index = |a: &MCTSNode, b: &MCTSNode| b.action_index.cmp(&a.action_index);
        let by_value = |a: &MCTSNode, b: &MCTSNode| {
            a.mean_value()
                .partial_cmp(&b.mean_value())
                .unwrap_or(Ordering::Equal)
        };

        let best = match self.config.final_selection {
            FinalSelection::MostVisited => tree.children(tree.root()).max_by(|a, b| {
                a.visits
                    .cmp(&b.visits)
                    .then_with(|| by_value(*a, *b))
                    .then_with(|| by_index(*a, *b))
            }),
            FinalSelection::BestValue => tree.children(tree.root()).max_by(|a, b| {
                by_value(*a, *b)
                    .then_with(|| a.visits.cmp(&b.visits))
                    .then_with(|| by_index(*a, *b))
            }),
        };

        best.and_then(|node| node.action)
    }

    /// Visit counts of the root's children from the last search.
    pub fn action_visits(&self) -> Vec<(Action, u32)> {
        self.root_children()
            .filter_map(|node| node.action.map(|a| (a, node.visits)))
            .collect()
    }

    /// Mean value (match player's perspective) of the root's children.
    pub fn action_values(&self) -> Vec<(Action, f64)> {
        self.root_children()
            .filter_map(|node| node.action.map(|a| (a, node.mean_value())))
            .collect()
    }

    fn root_children(&self) -> impl Iterator<Item = &MCTSNode> {
        self.tree
            .iter()
            .flat_map(|tree| tree.children(tree.root()))
    }

    /// Tree built by the last search (`None` if no search ran).
    #[must_use]
    pub fn tree(&self) -> Option<&MCTSTree> {
        self.tree.as_ref()
    }

    /// Statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}
