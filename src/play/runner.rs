//! Head-to-head match orchestration.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cards::{Deck, DeckPool};
use crate::core::{Action, PlayerId, PlayerMap, RulesConfig, TrucoError};
use crate::rules::GameState;
use crate::strategy::Strategy;

use super::result::{MatchResult, SeatSummary};

/// Two strategies playing one match on one deck.
///
/// Seat one holds the first strategy and is mão in the first hand.
pub struct Match {
    strategies: PlayerMap<Box<dyn Strategy>>,
    state: GameState,
    actions_taken: usize,
}

impl Match {
    pub fn new(
        one: Box<dyn Strategy>,
        two: Box<dyn Strategy>,
        deck: Arc<Deck>,
        rules: RulesConfig,
    ) -> Self {
        Self {
            strategies: PlayerMap::from_pair(one, two),
            state: GameState::new(deck, rules),
            actions_taken: 0,
        }
    }

    /// Current position.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn actions_taken(&self) -> usize {
        self.actions_taken
    }

    /// Ask the seat to move for one action and apply it.
    pub fn step(&mut self) -> Result<Action, TrucoError> {
        if self.state.is_game_over() {
            return Err(TrucoError::GameOver);
        }
        let limit = self.state.rules().max_match_actions();
        if self.actions_taken >= limit {
            return Err(TrucoError::Precondition(format!(
                "match did not finish within {} actions",
                limit
            )));
        }

        let seat = self.state.to_move();
        let action = self.strategies[seat].decide(&self.state)?;
        self.state = self.state.do_action(&action)?;
        self.actions_taken += 1;

        debug!(
            seat = seat.index(),
            strategy = self.strategies[seat].id(),
            hand = self.state.hand_number(),
            action = %action,
            "decision applied"
        );
        Ok(action)
    }

    /// Play until someone reaches the target score.
    ///
    /// Fails with `Precondition` up front if the rules cannot finish a match.
    pub fn play(mut self) -> Result<MatchResult, TrucoError> {
        self.state.rules().validate()?;
        while !self.state.is_game_over() {
            self.step()?;
        }
        let result = self.summary()?;

        info!(
            winner = %result.winner,
            score_one = result.seats[0].score,
            score_two = result.seats[1].score,
            hands = result.hands_played,
            actions = result.actions_taken,
            "match complete"
        );
        for seat in PlayerId::both() {
            if let Some(stats) = self.strategies[seat].search_stats() {
                debug!(
                    seat = seat.index(),
                    strategy = self.strategies[seat].id(),
                    searches = stats.searches,
                    iterations = stats.iterations,
                    terminal_hits = stats.terminal_hits,
                    max_depth = stats.max_depth,
                    iterations_per_second = stats.iterations_per_second(),
                    "search totals"
                );
            }
        }
        Ok(result)
    }

    fn summary(&self) -> Result<MatchResult, TrucoError> {
        let outcome = self
            .state
            .game_result()
            .ok_or_else(|| TrucoError::Precondition("match is still in progress".into()))?;

        let seat = |player: PlayerId| SeatSummary {
            id: self.strategies[player].id().to_string(),
            kind: self.strategies[player].kind(),
            seat: player,
            score: self.state.score(player),
        };

        Ok(MatchResult {
            winner: self.strategies[outcome.winner].id().to_string(),
            winner_seat: outcome.winner,
            seats: [seat(PlayerId::ONE), seat(PlayerId::TWO)],
            hands_played: self.state.hand_number() + 1,
            actions_taken: self.actions_taken,
            deck_seed: self.state.deck().seed(),
        })
    }
}

/// Draw the next deck from `pool` and play one match on it.
///
/// Fails with `DeckPoolExhausted` when the pool is empty. Invalid rules are
/// rejected before a deck is drawn.
pub fn run_match(
    one: Box<dyn Strategy>,
    two: Box<dyn Strategy>,
    pool: &mut DeckPool,
    rules: &RulesConfig,
) -> Result<MatchResult, TrucoError> {
    rules.validate()?;
    let deck = pool.draw()?;
    Match::new(one, two, deck, *rules).play()
}
