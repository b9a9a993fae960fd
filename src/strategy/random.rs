use crate::core::{Action, GameRng, TrucoError};
use crate::rules::GameState;

use super::{Strategy, StrategyKind};

/// Picks uniformly among the legal actions.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    id: String,
    rng: GameRng,
}

impl RandomStrategy {
    pub fn new(id: impl Into<String>, seed: u64) -> Self {
        Self {
            id: id.into(),
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn decide(&mut self, state: &GameState) -> Result<Action, TrucoError> {
        if state.is_game_over() {
            return Err(TrucoError::GameOver);
        }
        let actions = state.legal_actions();
        self.rng
            .choose(&actions)
            .copied()
            .ok_or_else(|| TrucoError::Precondition("live position has no legal actions".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::core::RulesConfig;
    use std::sync::Arc;

    #[test]
    fn test_random_is_legal_and_seeded() {
        let state = GameState::new(Arc::new(Deck::with_seed(12)), RulesConfig::default());
        let mut a = RandomStrategy::new("a", 5);
        let mut b = RandomStrategy::new("b", 5);

        for _ in 0..10 {
            let action = a.decide(&state).unwrap();
            assert!(state.is_legal(&action));
            assert_eq!(action, b.decide(&state).unwrap());
        }
    }
}
