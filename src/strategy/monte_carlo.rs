use crate::core::{Action, TrucoError};
use crate::mcts::{MCTSConfig, MCTSSearch, SearchStats};
use crate::rules::GameState;

use super::{Strategy, StrategyKind};

/// Runs a fresh MCTS search for every decision.
///
/// The search is rooted at the current position with the seat to move as
/// match player, so its tallies always read from this strategy's side. The
/// seed advances by one per decision. Search counters are summed over every
/// decision the strategy has made.
#[derive(Clone, Debug)]
pub struct MonteCarloStrategy {
    id: String,
    config: MCTSConfig,
    decisions: u64,
    totals: SearchStats,
}

impl MonteCarloStrategy {
    pub fn new(id: impl Into<String>, config: MCTSConfig) -> Self {
        Self {
            id: id.into(),
            config,
            decisions: 0,
            totals: SearchStats::default(),
        }
    }

}

impl Strategy for MonteCarloStrategy {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::MonteCarlo
    }

    fn decide(&mut self, state: &GameState) -> Result<Action, TrucoError> {
        let root = state.with_match_player(state.to_move());
        let seed = self.config.seed.wrapping_add(self.decisions);
        self.decisions += 1;

        let mut search = MCTSSearch::new(self.config.clone().with_seed(seed));
        let action = search.search(&root)?;
        self.totals.absorb(search.stats());
        Ok(action)
    }

    fn search_stats(&self) -> Option<&SearchStats> {
        Some(&self.totals)
    }
}
