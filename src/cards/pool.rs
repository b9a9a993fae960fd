//! Pool of pre-shuffled decks.
//!
//! Each match draws one deck from the pool. Running the same pool against
//! different strategy pairings gives every pairing the same sequence of
//! deals. Populating and clearing the pool are administrative operations
//! for the caller; the engine only draws.

use std::collections::VecDeque;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::core::{GameRng, TrucoError};

/// FIFO of shared decks.
#[derive(Clone, Debug, Default)]
pub struct DeckPool {
    decks: VecDeque<Arc<Deck>>,
}

#[derive(Serialize, Deserialize)]
struct PoolFile {
    decks: Vec<Deck>,
}

impl DeckPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pool's contents with `count` freshly shuffled decks.
    ///
    /// Deck seeds come from `seed`, so the same call rebuilds the same pool.
    pub fn populate(&mut self, count: usize, seed: u64) {
        let mut rng = GameRng::new(seed);
        self.decks.clear();
        self.decks
            .extend((0..count).map(|_| Arc::new(Deck::with_seed(rng.next_u64()))));
    }

    /// Remove every deck.
    pub fn clear(&mut self) {
        self.decks.clear();
    }

    /// Add a deck at the back of the pool.
    pub fn push(&mut self, deck: Deck) {
        self.decks.push_back(Arc::new(deck));
    }

    /// Take the next deck for a match.
    pub fn draw(&mut self) -> Result<Arc<Deck>, TrucoError> {
        self.decks.pop_front().ok_or(TrucoError::DeckPoolExhausted)
    }

    /// Number of decks left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Check if no deck is left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Iterate over the remaining decks in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Deck>> {
        self.decks.iter()
    }

    /// Encode the pool with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TrucoError> {
        let file = PoolFile {
            decks: self.decks.iter().map(|d| Deck::clone(d)).collect(),
        };
        Ok(bincode::serialize(&file)?)
    }

    /// Decode a pool written by [`DeckPool::to_bytes`], validating every deck.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TrucoError> {
        let file: PoolFile = bincode::deserialize(bytes)?;
        for deck in &file.decks {
            deck.validate()?;
        }
        Ok(Self {
            decks: file.decks.into_iter().map(Arc::new).collect(),
        })
    }
}
