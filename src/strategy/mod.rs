//! Decision makers that play a seat.
//!
//! This module provides:
//! - the `Strategy` trait every player implements
//! - `RandomStrategy`: uniform legal moves (seedable)
//! - `BaselineStrategy`: a fixed card-counting heuristic
//! - `MonteCarloStrategy`: one fresh MCTS search per decision
//! - `build_strategy`: construction from an algorithm name

mod baseline;
mod monte_carlo;
mod random;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Action, TrucoError};
use crate::mcts::{MCTSConfig, SearchStats};
use crate::rules::GameState;

pub use baseline::BaselineStrategy;
pub use monte_carlo::MonteCarloStrategy;
pub use random::RandomStrategy;

/// A player that picks one action per decision.
pub trait Strategy: Send {
    /// Name reported in match results.
    fn id(&self) -> &str;

    fn kind(&self) -> StrategyKind;

    /// Choose a legal action for `state.to_move()`.
    ///
    /// Fails with `GameOver` on a finished match.
    fn decide(&mut self, state: &GameState) -> Result<Action, TrucoError>;

    /// Search counters summed over this strategy's decisions, for strategies
    /// that search.
    fn search_stats(&self) -> Option<&SearchStats> {
        None
    }
}

/// The available algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyKind {
    Random,
    Baseline,
    MonteCarlo,
}

impl StrategyKind {
    /// Map an algorithm name to a kind. Unrecognised names select MCTS.
    #[must_use]
    pub fn from_algorithm(name: &str) -> Self {
        match name {
            "RANDOM" => StrategyKind::Random,
            "BASELINE" => StrategyKind::Baseline,
            _ => StrategyKind::MonteCarlo,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Random => "RANDOM",
            StrategyKind::Baseline => "BASELINE",
            StrategyKind::MonteCarlo => "MONTE_CARLO",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which algorithm to build, and the name it plays under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySpec {
    pub algorithm: String,
    pub id: String,
}

impl StrategySpec {
    pub fn new(algorithm: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            id: id.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        StrategyKind::from_algorithm(&self.algorithm)
    }
}

/// Tunables shared by every strategy built from one settings value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    /// Search parameters for `MonteCarlo`.
    pub mcts: MCTSConfig,

    /// Seed for `Random`.
    pub seed: u64,
}

impl StrategySettings {
    pub fn with_mcts(mut self, mcts: MCTSConfig) -> Self {
        self.mcts = mcts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Create a strategy from its algorithm name and id.
pub fn build_strategy(spec: &StrategySpec, settings: &StrategySettings) -> Box<dyn Strategy> {
    match spec.kind() {
        StrategyKind::Random => Box::new(RandomStrategy::new(spec.id.clone(), settings.seed)),
        StrategyKind::Baseline => Box::new(BaselineStrategy::new(spec.id.clone())),
        StrategyKind::MonteCarlo => {
            Box::new(MonteCarloStrategy::new(spec.id.clone(), settings.mcts.clone()))
        }
    }
}
