//! Match summaries.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::strategy::StrategyKind;

/// One seat's side of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSummary {
    pub id: String,
    pub kind: StrategyKind,
    pub seat: PlayerId,
    pub score: u32,
}

/// Outcome of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Id of the winning strategy.
    pub winner: String,
    pub winner_seat: PlayerId,
    pub seats: [SeatSummary; 2],
    pub hands_played: u32,
    pub actions_taken: usize,
    /// Seed of the deck the match was dealt from.
    pub deck_seed: u64,
}

impl MatchResult {
    /// Summary of the winning seat.
    #[must_use]
    pub fn winner_summary(&self) -> &SeatSummary {
        &self.seats[self.winner_seat.index()]
    }

    /// Winner's score minus loser's score.
    #[must_use]
    pub fn margin(&self) -> u32 {
        let winner = self.winner_seat;
        self.seats[winner.index()]
            .score
            .saturating_sub(self.seats[winner.opponent().index()].score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatchResult {
        MatchResult {
            winner: "mc".into(),
            winner_seat: PlayerId::TWO,
            seats: [
                SeatSummary {
                    id: "rand".into(),
                    kind: StrategyKind::Random,
                    seat: PlayerId::ONE,
                    score: 7,
                },
                SeatSummary {
                    id: "mc".into(),
                    kind: StrategyKind::MonteCarlo,
                    seat: PlayerId::TWO,
                    score: 12,
                },
            ],
            hands_played: 9,
            actions_taken: 51,
            deck_seed: 3,
        }
    }

    #[test]
    fn test_winner_summary() {
        let result = sample();
        assert_eq!(result.winner_summary().id, "mc");
        assert_eq!(result.margin(), 5);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["winner"], "mc");
        assert_eq!(json["seats"][0]["kind"], "RANDOM");

        let back: MatchResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
