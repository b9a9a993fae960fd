//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// How the final move is picked from the root once the budget is spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalSelection {
    /// Child with the most visits (ties: higher mean value).
    #[default]
    MostVisited,
    /// Child with the highest mean value, no exploration bonus.
    BestValue,
}

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MCTSConfig {
    /// Iterations (select, expand, roll out, backpropagate) per decision.
    pub iterations: u32,

    /// UCB1 exploration constant (default: 1.4).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Tally added for the rollout's winner at every node on the path.
    pub reward_per_win: f64,

    /// Random seed for expansion order and rollouts.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Maximum nodes to allocate in the tree.
    /// Prevents memory exhaustion on large searches.
    pub max_nodes: usize,

    /// Wall-clock budget per decision in milliseconds, checked between
    /// iterations. `None` runs the full iteration count.
    pub time_budget_ms: Option<u64>,

    /// Final move selection rule.
    pub final_selection: FinalSelection,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration_constant: 1.4,
            reward_per_win: 1.0,
            seed: 42,
            max_nodes: 100_000,
            time_budget_ms: None,
            final_selection: FinalSelection::MostVisited,
        }
    }
}

impl MCTSConfig {
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    pub fn with_reward_per_win(mut self, reward: f64) -> Self {
        self.reward_per_win = reward;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = Some(ms);
        self
    }

    pub fn with_final_selection(mut self, selection: FinalSelection) -> Self {
        self.final_selection = selection;
        self
    }
}
