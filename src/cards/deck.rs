//! The shuffled deck a match is played with.
//!
//! A `Deck` is shuffled once and then shared read-only (behind an `Arc`) by
//! both seats and every search tree of that match. Later hands re-deal from
//! a permutation derived from the deck's seed, so the whole match is fixed by
//! the deck alone and two strategies compared on the same deck face the same
//! cards.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{GameRng, TrucoError};

/// An ordered sequence of all 40 cards plus the seed used for re-deals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    seed: u64,
}

impl Deck {
    /// Shuffle a fresh deck from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(GameRng::from_entropy().seed())
    }

    /// Shuffle a fresh deck deterministically.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        GameRng::new(seed).shuffle(&mut cards);
        Self { cards, seed }
    }

    /// Build a deck from an explicit order.
    ///
    /// Fails unless `cards` holds each of the 40 cards exactly once.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Result<Self, TrucoError> {
        let deck = Self { cards, seed };
        deck.validate()?;
        Ok(deck)
    }

    /// Check that the deck holds each card exactly once.
    pub fn validate(&self) -> Result<(), TrucoError> {
        if self.cards.len() != Card::COUNT {
            return Err(TrucoError::InvalidDeck(format!(
                "expected {} cards, found {}",
                Card::COUNT,
                self.cards.len()
            )));
        }
        let mut seen = FxHashSet::default();
        for card in &self.cards {
            if !seen.insert(*card) {
                return Err(TrucoError::InvalidDeck(format!("duplicate card {}", card)));
            }
        }
        Ok(())
    }

    /// The deck order as shuffled.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The seed re-deals are derived from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Card order for the given hand of the match.
    ///
    /// Hand 0 deals the deck as shuffled; every later hand deals a permutation
    /// derived from the seed and the hand number.
    #[must_use]
    pub fn deal_order(&self, hand_number: u32) -> Vec<Card> {
        let mut order = self.cards.clone();
        if hand_number > 0 {
            GameRng::new(self.seed)
                .derive(u64::from(hand_number))
                .shuffle(&mut order);
        }
        order
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
