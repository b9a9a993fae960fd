//! Card identities and contextual trick strength.
//!
//! Truco uses the 40-card Spanish-suited deck (no 8, 9, 10). Trick strength
//! is not a fixed order: the card turned up at the start of a hand (the
//! vira) promotes the next rank to manilha, and the four manilhas outrank
//! everything else, ordered by suit.

use serde::{Deserialize, Serialize};

/// Card rank, in normal trick order (weakest first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
    Ace,
    Two,
    Three,
}

impl Rank {
    /// All ranks, weakest first.
    pub const ALL: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    /// Position in the normal order (0..=9).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The rank that follows this one, wrapping from Three back to Four.
    #[must_use]
    pub const fn next(self) -> Rank {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
        }
    }
}

/// Card suit, in manilha order (weakest first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Pica-fumo when a manilha.
    Diamonds,
    /// Espadilha when a manilha.
    Spades,
    /// Copas when a manilha.
    Hearts,
    /// Zap when a manilha.
    Clubs,
}

impl Suit {
    /// All suits, weakest manilha first.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    /// Position in the manilha order (0..=3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
        }
    }
}

/// Strength given to the weakest manilha; every manilha beats every other card.
const MANILHA_BASE: u8 = Rank::ALL.len() as u8;

/// An immutable card identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Number of cards in a Truco deck.
    pub const COUNT: usize = 40;

    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Every card exactly once, ordered by rank then suit.
    pub fn all() -> impl Iterator<Item = Card> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
    }

    /// Check if this card is a manilha under the given vira.
    #[must_use]
    pub fn is_manilha(self, vira: Card) -> bool {
        self.rank == vira.rank.next()
    }

    /// Trick strength under the given vira. Higher wins; equal strength ties.
    ///
    /// ```
    /// use truco_mcts::cards::{Card, Rank, Suit};
    ///
    /// let vira = Card::new(Rank::Seven, Suit::Hearts); // queens are manilhas
    /// let zap = Card::new(Rank::Queen, Suit::Clubs);
    /// let three = Card::new(Rank::Three, Suit::Spades);
    ///
    /// assert!(zap.strength(vira) > three.strength(vira));
    /// ```
    #[must_use]
    pub fn strength(self, vira: Card) -> u8 {
        if self.is_manilha(vira) {
            MANILHA_BASE + self.suit.index()
        } else {
            self.rank.index()
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cards_distinct() {
        let cards: Vec<_> = Card::all().collect();
        assert_eq!(cards.len(), Card::COUNT);

        let unique: std::collections::BTreeSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), Card::COUNT);
        assert!(cards.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_manilha_wraps_around() {
        let vira = Card::new(Rank::Three, Suit::Diamonds);
        assert!(Card::new(Rank::Four, Suit::Spades).is_manilha(vira));
        assert!(!Card::new(Rank::Three, Suit::Spades).is_manilha(vira));
    }

    #[test]
    fn test_manilhas_ordered_by_suit() {
        let vira = Card::new(Rank::King, Suit::Hearts);
        let strengths: Vec<_> = Suit::ALL
            .iter()
            .map(|&s| Card::new(Rank::Ace, s).strength(vira))
            .collect();

        assert_eq!(strengths, vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_manilha_beats_three() {
        let vira = Card::new(Rank::Four, Suit::Clubs);
        let weakest_manilha = Card::new(Rank::Five, Suit::Diamonds);
        let three = Card::new(Rank::Three, Suit::Clubs);

        assert!(weakest_manilha.strength(vira) > three.strength(vira));
    }

    #[test]
    fn test_same_rank_ties_outside_manilha() {
        let vira = Card::new(Rank::Four, Suit::Clubs);
        let a = Card::new(Rank::Two, Suit::Hearts);
        let b = Card::new(Rank::Two, Suit::Spades);

        assert_eq!(a.strength(vira), b.strength(vira));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).to_string(), "Q♣");
        assert_eq!(Card::new(Rank::Four, Suit::Diamonds).to_string(), "4♦");
    }
}
