//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to choose which child to descend into (UCB1)
//! - `SimulationPolicy`: How to finish the match from a leaf (random rollout)

use std::cmp::Ordering;

use crate::core::{GameRng, TrucoError};
use crate::rules::{GameResult, GameState};

use super::config::MCTSConfig;
use super::node::{MCTSNode, NodeId};
use super::tree::MCTSTree;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Pick a child of `node`. `None` if it has no children.
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId>;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Formula: q/n + c * sqrt(2 ln(N) / n), where q is the child's tally from
/// the match player's perspective and N is the parent's visit count.
/// Unvisited children score infinity. Equal scores go to the lower
/// canonical action index.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

/// UCB1 score of `child` under a parent visited `parent_visits` times.
#[must_use]
pub fn ucb1_score(child: &MCTSNode, parent_visits: u32, exploration: f64) -> f64 {
    if child.visits == 0 {
        return f64::INFINITY;
    }
    let n = f64::from(child.visits);
    let ln_parent = f64::from(parent_visits.max(1)).ln();
    child.q() / n + exploration * (2.0 * ln_parent / n).sqrt()
}

impl SelectionPolicy for UCB1 {
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId> {
        let parent_visits = tree.get(node).visits;

        let mut best: Option<(NodeId, f64, usize)> = None;
        for &child_id in &tree.get(node).children {
            let child = tree.get(child_id);
            let score = ucb1_score(child, parent_visits, config.exploration_constant);
            let better = match best {
                None => true,
                Some((_, best_score, best_index)) => match score.partial_cmp(&best_score) {
                    Some(Ordering::Greater) => true,
                    Some(Ordering::Equal) => child.action_index < best_index,
                    _ => false,
                },
            };
            if better {
                best = Some((child_id, score, child.action_index));
            }
        }

        best.map(|(id, _, _)| id)
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf node.
pub trait SimulationPolicy: Send + Sync {
    /// Play the match out from `state` and report who won.
    fn simulate(&self, state: &GameState, rng: &mut GameRng) -> Result<GameResult, TrucoError>;
}

/// Random simulation policy.
///
/// Plays uniformly random legal actions until the match ends.
#[derive(Clone, Debug, Default)]
pub struct RandomSimulation;

impl SimulationPolicy for RandomSimulation {
    fn simulate(&self, state: &GameState, rng: &mut GameRng) -> Result<GameResult, TrucoError> {
        let limit = state.rules().max_match_actions();
        let mut current = state.clone();

        for _ in 0..=limit {
            if let Some(result) = current.game_result() {
                return Ok(result);
            }

            let actions = current.legal_actions();
            let action = rng.choose(&actions).ok_or_else(|| {
                TrucoError::Precondition("live position has no legal actions".into())
            })?;
            current = current.do_action(action)?;
        }

        Err(TrucoError::Precondition(format!(
            "rollout did not finish within {} actions",
            limit
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck, Rank, Suit};
    use crate::core::{PlayerId, RulesConfig};
    use crate::rules::GameStateBuilder;
    use std::sync::Arc;

    fn expanded_root(children: usize) -> MCTSTree {
        let state = GameState::new(Arc::new(Deck::with_seed(21)), RulesConfig::default());
        let mut rng = GameRng::new(0);
        let mut tree = MCTSTree::new(state, &mut rng);
        let root = tree.root();
        for _ in 0..children {
            let (index, action) = tree.get_mut(root).pop_untried().unwrap();
            let next = tree.get(root).state().do_action(&action).unwrap();
            let id = tree.alloc(MCTSNode::child(next, root, action, index, 1, &mut rng));
            tree.get_mut(root).children.push(id);
        }
        tree
    }

    #[test]
    fn test_ucb1_unvisited_is_infinite() {
        let tree = expanded_root(1);
        let child = tree.children(tree.root()).next().unwrap();
        assert_eq!(ucb1_score(child, 10, 1.4), f64::INFINITY);
    }

    #[test]
    fn test_ucb1_prefers_lower_index_on_ties() {
        let tree = expanded_root(4);
        let config = MCTSConfig::default();

        let chosen = UCB1.select(&tree, tree.root(), &config).unwrap();
        assert_eq!(tree.get(chosen).action_index, 0);
    }

    #[test]
    fn test_ucb1_exploration_bias() {
        let mut tree = expanded_root(2);
        let root = tree.root();
        let ids: Vec<NodeId> = tree.get(root).children.to_vec();
        let me = tree.get(root).state().match_player();

        // Both children won every rollout; the one visited less gets the larger bonus.
        for _ in 0..10 {
            tree.backpropagate(ids[0], me, 1.0);
        }
        for _ in 0..2 {
            tree.backpropagate(ids[1], me, 1.0);
        }

        let chosen = UCB1.select(&tree, root, &MCTSConfig::default()).unwrap();
        assert_eq!(chosen, ids[1]);

        // Without exploration, equal means fall back to the canonical index.
        let greedy = MCTSConfig::default().with_exploration(0.0);
        let chosen = UCB1.select(&tree, root, &greedy).unwrap();
        let lower = if tree.get(ids[0]).action_index < tree.get(ids[1]).action_index {
            ids[0]
        } else {
            ids[1]
        };
        assert_eq!(chosen, lower);
    }

    #[test]
    fn test_ucb1_formula() {
        let mut tree = expanded_root(1);
        let root = tree.root();
        let child = tree.get(root).children[0];
        let me = tree.get(root).state().match_player();
        tree.backpropagate(child, me, 1.0);
        tree.backpropagate(child, me.opponent(), 1.0);
        tree.backpropagate(child, me, 1.0);

        let expected = 1.0 / 3.0 + 1.4 * (2.0 * 8f64.ln() / 3.0).sqrt();
        assert!((ucb1_score(tree.get(child), 8, 1.4) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_select_without_children() {
        let tree = expanded_root(0);
        assert_eq!(UCB1.select(&tree, tree.root(), &MCTSConfig::default()), None);
    }

    #[test]
    fn test_random_rollout_finishes() {
        let state = GameState::new(Arc::new(Deck::with_seed(5)), RulesConfig::default());
        let mut rng = GameRng::new(9);

        let result = RandomSimulation.simulate(&state, &mut rng).unwrap();
        assert!(result.margin > 0);
    }

    #[test]
    fn test_rollout_on_finished_match() {
        let state = GameStateBuilder::new(Card::new(Rank::Four, Suit::Clubs))
            .scores(3, 12)
            .build()
            .unwrap();

        let result = RandomSimulation.simulate(&state, &mut GameRng::new(0)).unwrap();
        assert_eq!(result.winner, PlayerId::TWO);
    }
}
