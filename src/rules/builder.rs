//! Construct arbitrary positions at the start of a trick.
//!
//! Used for puzzles, tests and benchmarks: pick the vira and both hands, and
//! the builder puts every other card into the stock so the position still
//! holds the full deck.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::state::{GameState, Phase, HAND_SIZE};
use crate::cards::{Card, Deck};
use crate::core::{next_stake, PlayerId, PlayerMap, RulesConfig, TrucoError, BASE_STAKE, MAX_STAKE};

/// Builder for a `GameState` positioned at the start of a trick.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    vira: Card,
    hands: PlayerMap<Vec<Card>>,
    scores: PlayerMap<u32>,
    rules: RulesConfig,
    deck: Option<Arc<Deck>>,
    to_move: PlayerId,
    hand_leader: PlayerId,
    hand_number: u32,
    stake: u32,
    match_player: PlayerId,
}

impl GameStateBuilder {
    /// Start from empty hands under the given vira; seat one to move.
    pub fn new(vira: Card) -> Self {
        Self {
            vira,
            hands: PlayerMap::default(),
            scores: PlayerMap::default(),
            rules: RulesConfig::default(),
            deck: None,
            to_move: PlayerId::ONE,
            hand_leader: PlayerId::ONE,
            hand_number: 0,
            stake: BASE_STAKE,
            match_player: PlayerId::ONE,
        }
    }

    pub fn hand(mut self, player: PlayerId, cards: &[Card]) -> Self {
        self.hands[player] = cards.to_vec();
        self
    }

    pub fn scores(mut self, one: u32, two: u32) -> Self {
        self.scores[PlayerId::ONE] = one;
        self.scores[PlayerId::TWO] = two;
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Deck used to deal the hands after this one (default: seed 0).
    pub fn deck(mut self, deck: Arc<Deck>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn to_move(mut self, player: PlayerId) -> Self {
        self.to_move = player;
        self
    }

    pub fn hand_leader(mut self, player: PlayerId) -> Self {
        self.hand_leader = player;
        self
    }

    pub fn hand_number(mut self, hand_number: u32) -> Self {
        self.hand_number = hand_number;
        self
    }

    pub fn stake(mut self, stake: u32) -> Self {
        self.stake = stake;
        self
    }

    pub fn match_player(mut self, player: PlayerId) -> Self {
        self.match_player = player;
        self
    }

    /// Validate and build.
    ///
    /// Fails if a card appears twice or the stake is not on the raise ladder.
    /// In a live position both seats must hold between one and three cards,
    /// the seat to move holding as many as its opponent or one more.
    pub fn build(self) -> Result<GameState, TrucoError> {
        let mut seen = FxHashSet::default();
        seen.insert(self.vira);
        for (_, hand) in self.hands.iter() {
            for &card in hand {
                if !seen.insert(card) {
                    return Err(TrucoError::InvalidDeck(format!("duplicate card {}", card)));
                }
            }
        }

        if self.stake != BASE_STAKE && self.stake != MAX_STAKE && next_stake(self.stake).is_none() {
            return Err(TrucoError::Precondition(format!(
                "stake {} is not on the raise ladder",
                self.stake
            )));
        }

        let target = self.rules.target_score;
        let phase = if self.scores[PlayerId::ONE] >= target || self.scores[PlayerId::TWO] >= target {
            let winner = if self.scores[PlayerId::ONE] >= self.scores[PlayerId::TWO] {
                PlayerId::ONE
            } else {
                PlayerId::TWO
            };
            Phase::GameOver { winner }
        } else {
            self.check_hand_sizes()?;
            Phase::Playing
        };

        let stock = Card::all().filter(|c| !seen.contains(c)).collect();

        Ok(GameState {
            deck: self.deck.unwrap_or_else(|| Arc::new(Deck::with_seed(0))),
            rules: self.rules,
            match_player: self.match_player,
            hand_number: self.hand_number,
            hand_leader: self.hand_leader,
            vira: self.vira,
            hands: self.hands.map(|h| h.iter().copied().collect()),
            table: Default::default(),
            discards: Default::default(),
            stock,
            tricks: Default::default(),
            scores: self.scores,
            stake: self.stake,
            last_raiser: None,
            phase,
            to_move: self.to_move,
        })
    }

    fn check_hand_sizes(&self) -> Result<(), TrucoError> {
        for (player, hand) in self.hands.iter() {
            if hand.is_empty() || hand.len() > HAND_SIZE {
                return Err(TrucoError::Precondition(format!(
                    "{} holds {} cards in a live position",
                    player,
                    hand.len()
                )));
            }
        }

        let mover = self.hands[self.to_move].len();
        let other = self.hands[self.to_move.opponent()].len();
        if mover != other && mover != other + 1 {
            return Err(TrucoError::Precondition(format!(
                "{} is to move with {} cards against {}",
                self.to_move, mover, other
            )));
        }
        Ok(())
    }
}
