//! Match position and transitions.
//!
//! `GameState` is logically immutable: `do_action` returns a successor and
//! leaves `self` untouched, so a search tree can keep every visited position.
//! Cloning is cheap: hands and trick areas are small inline vectors, the
//! undealt stock is a persistent `im::Vector`, and the deck is shared.

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use super::result::GameResult;
use super::trick::{hand_winner, resolve_trick, TrickOutcome};
use crate::cards::{Card, Deck, Rank, Suit};
use crate::core::{
    next_stake, Action, PlayerId, PlayerMap, RulesConfig, TrucoError, BASE_STAKE, PLAYER_COUNT,
};

/// Cards dealt to each seat at the start of a hand.
pub const HAND_SIZE: usize = 3;

/// Cards held by one seat.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// What the player to move is being asked to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Play a card (or call a raise).
    Playing,

    /// Answer `caller`'s proposal to raise the stake to `proposed`. Card play
    /// resumes with `resume` once the raise is accepted.
    RaiseCalled {
        caller: PlayerId,
        proposed: u32,
        resume: PlayerId,
    },

    /// Someone reached the target score.
    GameOver { winner: PlayerId },
}

/// Complete match position.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(super) deck: Arc<Deck>,
    pub(super) rules: RulesConfig,
    pub(super) match_player: PlayerId,
    pub(super) hand_number: u32,
    pub(super) hand_leader: PlayerId,
    pub(super) vira: Card,
    pub(super) hands: PlayerMap<Hand>,
    /// Cards on the current trick, in play order.
    pub(super) table: SmallVec<[(PlayerId, Card); PLAYER_COUNT]>,
    /// Cards from the completed tricks of this hand.
    pub(super) discards: SmallVec<[Card; 6]>,
    /// Undealt cards of this hand.
    pub(super) stock: Vector<Card>,
    pub(super) tricks: SmallVec<[TrickOutcome; HAND_SIZE]>,
    pub(super) scores: PlayerMap<u32>,
    pub(super) stake: u32,
    /// Seat whose raise was accepted most recently this hand.
    pub(super) last_raiser: Option<PlayerId>,
    pub(super) phase: Phase,
    pub(super) to_move: PlayerId,
}

impl GameState {
    /// Start a match: scores at zero, first hand dealt from `deck`.
    pub fn new(deck: Arc<Deck>, rules: RulesConfig) -> Self {
        let mut state = Self {
            deck,
            rules,
            match_player: PlayerId::ONE,
            hand_number: 0,
            hand_leader: PlayerId::ONE,
            vira: Card::new(Rank::Four, Suit::Diamonds),
            hands: PlayerMap::default(),
            table: SmallVec::new(),
            discards: SmallVec::new(),
            stock: Vector::new(),
            tricks: SmallVec::new(),
            scores: PlayerMap::default(),
            stake: BASE_STAKE,
            last_raiser: None,
            phase: Phase::Playing,
            to_move: PlayerId::ONE,
        };
        state.deal(0);
        state
    }

    /// Deal hand `hand_number` from the deck and reset all per-hand state.
    ///
    /// The mão alternates every hand and receives the even positions of the
    /// deal order; position 6 is the vira and the rest stays in the stock.
    fn deal(&mut self, hand_number: u32) {
        let order = self.deck.deal_order(hand_number);
        let leader = PlayerId::new((hand_number % 2) as u8);
        let dealt = 2 * HAND_SIZE;

        self.hand_number = hand_number;
        self.hand_leader = leader;
        self.hands[leader] = order[..dealt].iter().step_by(2).copied().collect();
        self.hands[leader.opponent()] = order[1..dealt].iter().step_by(2).copied().collect();
        self.vira = order[dealt];
        self.stock = order[dealt + 1..].iter().copied().collect();
        self.table.clear();
        self.discards.clear();
        self.tricks.clear();
        self.stake = BASE_STAKE;
        self.last_raiser = None;
        self.phase = Phase::Playing;
        self.to_move = leader;
    }

    // === Queries ===

    /// Seat whose perspective search rewards are measured from.
    #[must_use]
    pub fn match_player(&self) -> PlayerId {
        self.match_player
    }

    /// Copy of this state with a different reward perspective.
    ///
    /// Every successor inherits the perspective unchanged.
    #[must_use]
    pub fn with_match_player(&self, player: PlayerId) -> Self {
        let mut state = self.clone();
        state.match_player = player;
        state
    }

    /// Seat that must act next.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The card that decides this hand's manilhas.
    #[must_use]
    pub fn vira(&self) -> Card {
        self.vira
    }

    /// Cards held by a seat.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// Cards on the current trick, in play order.
    #[must_use]
    pub fn table(&self) -> &[(PlayerId, Card)] {
        &self.table
    }

    /// Cards from this hand's completed tricks.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Undealt cards of this hand.
    pub fn stock(&self) -> impl Iterator<Item = &Card> {
        self.stock.iter()
    }

    /// Outcomes of this hand's completed tricks.
    #[must_use]
    pub fn tricks(&self) -> &[TrickOutcome] {
        &self.tricks
    }

    /// Match score of a seat.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Match scores of both seats.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.scores
    }

    /// Points the current hand is worth.
    #[must_use]
    pub fn stake(&self) -> u32 {
        self.stake
    }

    /// Zero-based number of the current hand.
    #[must_use]
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }

    /// Seat that led the first trick of this hand.
    #[must_use]
    pub fn hand_leader(&self) -> PlayerId {
        self.hand_leader
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn deck(&self) -> &Arc<Deck> {
        &self.deck
    }

    /// Check if the match has reached its target score.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// Final outcome; `None` until the match is over.
    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver { winner } => Some(GameResult {
                winner,
                margin: self.scores[winner].saturating_sub(self.scores[winner.opponent()]),
            }),
            _ => None,
        }
    }

    /// While either seat is one point from the target, nobody may raise.
    #[must_use]
    pub fn is_hand_of_eleven(&self) -> bool {
        let threshold = self.rules.target_score.saturating_sub(1);
        self.scores.iter().any(|(_, &s)| s == threshold)
    }

    fn can_raise(&self, player: PlayerId) -> bool {
        next_stake(self.stake).is_some()
            && self.last_raiser != Some(player)
            && !self.is_hand_of_eleven()
    }

    /// Legal actions in canonical order; empty iff the match is over.
    ///
    /// Card turn: one `Play` per card in hand order, then `Raise` if allowed.
    /// Answering a raise: `Accept`, `Decline`, then `Raise` if the ladder
    /// continues.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase {
            Phase::GameOver { .. } => Vec::new(),
            Phase::Playing => {
                let mut actions: Vec<Action> = self.hands[self.to_move]
                    .iter()
                    .map(|&card| Action::Play(card))
                    .collect();
                if self.can_raise(self.to_move) {
                    actions.push(Action::Raise);
                }
                actions
            }
            Phase::RaiseCalled { proposed, .. } => {
                let mut actions = vec![Action::Accept, Action::Decline];
                if next_stake(proposed).is_some() {
                    actions.push(Action::Raise);
                }
                actions
            }
        }
    }

    /// Check if an action is legal here.
    #[must_use]
    pub fn is_legal(&self, action: &Action) -> bool {
        self.legal_actions().contains(action)
    }

    // === Transitions ===

    /// Successor state after `action`.
    ///
    /// Fails with `GameOver` on a finished match and `IllegalAction` for any
    /// action outside `legal_actions()`.
    pub fn do_action(&self, action: &Action) -> Result<GameState, TrucoError> {
        if self.is_game_over() {
            return Err(TrucoError::GameOver);
        }
        if !self.is_legal(action) {
            return Err(TrucoError::IllegalAction { action: *action });
        }

        let illegal = || TrucoError::IllegalAction { action: *action };
        let mut next = self.clone();

        match (*action, self.phase) {
            (Action::Play(card), Phase::Playing) => next.play_card(card),
            (Action::Raise, Phase::Playing) => {
                let proposed = next_stake(self.stake).ok_or_else(illegal)?;
                next.phase = Phase::RaiseCalled {
                    caller: self.to_move,
                    proposed,
                    resume: self.to_move,
                };
                next.to_move = self.to_move.opponent();
            }
            (Action::Raise, Phase::RaiseCalled { caller, proposed, resume }) => {
                // Re-raising accepts the pending proposal first.
                let counter = next_stake(proposed).ok_or_else(illegal)?;
                next.stake = proposed;
                next.last_raiser = Some(caller);
                next.phase = Phase::RaiseCalled {
                    caller: self.to_move,
                    proposed: counter,
                    resume,
                };
                next.to_move = caller;
            }
            (Action::Accept, Phase::RaiseCalled { caller, proposed, resume }) => {
                next.stake = proposed;
                next.last_raiser = Some(caller);
                next.phase = Phase::Playing;
                next.to_move = resume;
            }
            (Action::Decline, Phase::RaiseCalled { caller, .. }) => next.award_hand(caller),
            _ => return Err(illegal()),
        }

        Ok(next)
    }

    fn play_card(&mut self, card: Card) {
        let player = self.to_move;
        let hand = &mut self.hands[player];
        if let Some(pos) = hand.iter().position(|&c| c == card) {
            hand.remove(pos);
        }
        self.table.push((player, card));

        if self.table.len() < PLAYER_COUNT {
            self.to_move = player.opponent();
            return;
        }

        let outcome = resolve_trick(self.table[0], self.table[1], self.vira);
        let trick_leader = self.table[0].0;
        self.discards.extend(self.table.drain(..).map(|(_, c)| c));
        self.tricks.push(outcome);

        let exhausted = self.hands.iter().any(|(_, h)| h.is_empty());
        match hand_winner(&self.tricks, exhausted, self.hand_leader) {
            Some(winner) => self.award_hand(winner),
            None => self.to_move = outcome.winner().unwrap_or(trick_leader),
        }
    }

    fn award_hand(&mut self, winner: PlayerId) {
        self.scores[winner] += self.stake;
        trace!(
            hand = self.hand_number,
            winner = winner.index(),
            points = self.stake,
            score_one = self.scores[PlayerId::ONE],
            score_two = self.scores[PlayerId::TWO],
            "hand awarded"
        );

        if self.scores[winner] >= self.rules.target_score {
            self.phase = Phase::GameOver { winner };
        } else {
            self.deal(self.hand_number + 1);
        }
    }

    // === Invariants ===

    /// Every card in this position: both hands, the table, the discards, the
    /// vira and the stock.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(Card::COUNT);
        for (_, hand) in self.hands.iter() {
            cards.extend(hand.iter().copied());
        }
        cards.extend(self.table.iter().map(|&(_, c)| c));
        cards.extend(self.discards.iter().copied());
        cards.push(self.vira);
        cards.extend(self.stock.iter().copied());
        cards
    }

    /// Check that the position holds each of the 40 cards exactly once.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let cards = self.all_cards();
        let unique: FxHashSet<Card> = cards.iter().copied().collect();
        cards.len() == Card::COUNT && unique.len() == Card::COUNT
    }
}
