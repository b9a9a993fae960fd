//! A fixed heuristic player.
//!
//! Card play: follow with the cheapest card that wins the trick (or dump the
//! weakest card if none does), lead the first trick with the strongest card
//! and later tricks with the weakest. Betting: raise with two strong cards,
//! accept with one, decline otherwise.

use crate::cards::Card;
use crate::core::{Action, TrucoError};
use crate::rules::{GameState, Phase};

use super::{Strategy, StrategyKind};

/// Strength of a Two; anything at or above it counts as a strong card.
const STRONG_CARD: u8 = 8;

/// Strong cards needed to raise or re-raise.
const RAISE_WITH: usize = 2;

/// Strong cards needed to accept a raise.
const ACCEPT_WITH: usize = 1;

/// Deterministic rule-of-thumb strategy.
#[derive(Clone, Debug)]
pub struct BaselineStrategy {
    id: String,
}

impl BaselineStrategy {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Strong cards still in play for the seat to move: its hand plus a
    /// card it already put on the current trick.
    fn strong_cards(state: &GameState) -> usize {
        let me = state.to_move();
        let vira = state.vira();
        state
            .hand(me)
            .iter()
            .chain(state.table().iter().filter(|(p, _)| *p == me).map(|(_, c)| c))
            .filter(|c| c.strength(vira) >= STRONG_CARD)
            .count()
    }

    fn choose_card(state: &GameState) -> Option<Card> {
        let vira = state.vira();
        let hand = state.hand(state.to_move());
        let weakest = hand.iter().copied().min_by_key(|c| c.strength(vira));

        match state.table().first() {
            Some(&(_, led)) => hand
                .iter()
                .copied()
                .filter(|c| c.strength(vira) > led.strength(vira))
                .min_by_key(|c| c.strength(vira))
                .or(weakest),
            None if state.tricks().is_empty() => {
                hand.iter().copied().max_by_key(|c| c.strength(vira))
            }
            None => weakest,
        }
    }
}

impl Strategy for BaselineStrategy {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Baseline
    }

    fn decide(&mut self, state: &GameState) -> Result<Action, TrucoError> {
        if state.is_game_over() {
            return Err(TrucoError::GameOver);
        }

        let legal = state.legal_actions();
        let strong = Self::strong_cards(state);
        let can_raise = legal.contains(&Action::Raise);

        let action = match state.phase() {
            Phase::RaiseCalled { .. } if strong >= RAISE_WITH && can_raise => Action::Raise,
            Phase::RaiseCalled { .. } if strong >= ACCEPT_WITH => Action::Accept,
            Phase::RaiseCalled { .. } => Action::Decline,
            _ if strong >= RAISE_WITH && can_raise => Action::Raise,
            _ => Self::choose_card(state).map(Action::Play).ok_or_else(|| {
                TrucoError::Precondition(format!("{} has no card to play", state.to_move()))
            })?,
        };

        debug_assert!(legal.contains(&action));
        Ok(action)
    }
}
