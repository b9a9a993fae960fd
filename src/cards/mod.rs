//! Cards, decks, and the deck pool.
//!
//! - `Card`: rank + suit, with trick strength relative to the vira
//! - `Deck`: one shuffled 40-card order per match, shared read-only
//! - `DeckPool`: pre-shuffled decks drawn one per match

pub mod card;
pub mod deck;
pub mod pool;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use pool::DeckPool;
