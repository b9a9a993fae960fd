//! Outcome of a finished match.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed match. Truco has no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The seat that reached the target score.
    pub winner: PlayerId,

    /// Final point difference between winner and loser.
    pub margin: u32,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// Signed outcome from a seat's perspective: +1 for a win, -1 for a loss.
    #[must_use]
    pub fn value_for(&self, player: PlayerId) -> i32 {
        if self.is_winner(player) {
            1
        } else {
            -1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_perspective() {
        let result = GameResult {
            winner: PlayerId::TWO,
            margin: 4,
        };

        assert!(result.is_winner(PlayerId::TWO));
        assert!(!result.is_winner(PlayerId::ONE));
        assert_eq!(result.value_for(PlayerId::TWO), 1);
        assert_eq!(result.value_for(PlayerId::ONE), -1);
    }
}
