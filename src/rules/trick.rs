//! Trick resolution and hand decision.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// Trick wins needed to take a hand outright.
pub const TRICKS_TO_WIN: usize = 2;

/// Outcome of one trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrickOutcome {
    Won(PlayerId),
    Tied,
}

impl TrickOutcome {
    /// The trick winner, if the trick was decisive.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            TrickOutcome::Won(player) => Some(player),
            TrickOutcome::Tied => None,
        }
    }
}

/// Compare two played cards by their strength under `vira`.
#[must_use]
pub fn resolve_trick(first: (PlayerId, Card), second: (PlayerId, Card), vira: Card) -> TrickOutcome {
    let (a, b) = (first.1.strength(vira), second.1.strength(vira));
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => TrickOutcome::Won(first.0),
        std::cmp::Ordering::Less => TrickOutcome::Won(second.0),
        std::cmp::Ordering::Equal => TrickOutcome::Tied,
    }
}

/// Decide the hand from the tricks played so far.
///
/// - two trick wins take the hand;
/// - once any trick has tied, the first decisive trick decides it;
/// - when a seat runs out of cards, the first decisive trick decides it, and
///   if every trick tied the hand leader (mão) takes it.
///
/// Returns `None` while the hand is still open.
#[must_use]
pub fn hand_winner(
    tricks: &[TrickOutcome],
    cards_exhausted: bool,
    hand_leader: PlayerId,
) -> Option<PlayerId> {
    let first_decisive = tricks.iter().find_map(|t| t.winner());

    for player in PlayerId::both() {
        let wins = tricks.iter().filter(|t| t.winner() == Some(player)).count();
        if wins >= TRICKS_TO_WIN {
            return Some(player);
        }
    }

    if tricks.contains(&TrickOutcome::Tied) && first_decisive.is_some() {
        return first_decisive;
    }

    if cards_exhausted {
        return Some(first_decisive.unwrap_or(hand_leader));
    }

    None
}
