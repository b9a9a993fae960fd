//! Action representation.
//!
//! A Truco move is either a card play or a step in the betting ladder:
//! calling a raise, or answering one. Legality is decided by
//! `GameState::legal_actions`; the action itself carries no context.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A complete game action.
///
/// ```
/// use truco_mcts::cards::{Card, Rank, Suit};
/// use truco_mcts::core::Action;
///
/// let play = Action::Play(Card::new(Rank::Three, Suit::Clubs));
/// assert!(play.is_card_play());
/// assert_eq!(play.to_string(), "play 3♣");
/// assert_eq!(Action::Raise.to_string(), "raise");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "card", rename_all = "snake_case")]
pub enum Action {
    /// Play a card from hand onto the current trick.
    Play(Card),

    /// Call truco, or re-raise a pending call, to the next stake.
    Raise,

    /// Accept a pending raise.
    Accept,

    /// Decline a pending raise, conceding the hand at the current stake.
    Decline,
}

impl Action {
    /// Check if this action plays a card.
    #[must_use]
    pub fn is_card_play(self) -> bool {
        matches!(self, Action::Play(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(card) => write!(f, "play {}", card),
            Action::Raise => f.write_str("raise"),
            Action::Accept => f.write_str("accept"),
            Action::Decline => f.write_str("decline"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_card_play_query() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert!(Action::Play(card).is_card_play());
        assert!(!Action::Raise.is_card_play());
        assert!(!Action::Decline.is_card_play());
    }

    #[test]
    fn test_action_equality() {
        let a = Action::Play(Card::new(Rank::Four, Suit::Clubs));
        let b = Action::Play(Card::new(Rank::Four, Suit::Clubs));
        let c = Action::Play(Card::new(Rank::Four, Suit::Hearts));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(Action::Accept, Action::Decline);
    }

    #[test]
    fn test_action_serialization() {
        for action in [
            Action::Play(Card::new(Rank::King, Suit::Diamonds)),
            Action::Raise,
            Action::Accept,
            Action::Decline,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, deserialized);
        }
    }
}
