//! # truco-mcts
//!
//! Heads-up Truco Paulista with a Monte Carlo Tree Search player.
//!
//! ## Design Principles
//!
//! 1. **Positions are values**: `GameState::do_action` returns a new state,
//!    so a search tree can hold every position it visits.
//!
//! 2. **One deck per match**: both seats and every search tree share the
//!    match's `Arc<Deck>`; later hands are re-dealt deterministically from
//!    its seed, so a deck fixes the whole card sequence of a match.
//!
//! 3. **Seeded everything**: decks, random players and searches take
//!    explicit seeds and reproduce exactly.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, actions, rules configuration, errors
//! - `cards`: cards, vira-relative strength, decks, deck pool
//! - `rules`: the Truco state machine
//! - `mcts`: Monte Carlo Tree Search
//! - `strategy`: Random, Baseline and MCTS players
//! - `play`: match orchestration and summaries
//!
//! ## Example
//!
//! ```rust
//! use truco_mcts::{build_strategy, run_match, DeckPool, RulesConfig, StrategySettings, StrategySpec};
//! use truco_mcts::mcts::MCTSConfig;
//!
//! let mut pool = DeckPool::new();
//! pool.populate(1, 7);
//!
//! let settings = StrategySettings::default().with_mcts(MCTSConfig::default().with_iterations(50));
//! let mcts = build_strategy(&StrategySpec::new("MONTE_CARLO", "mcts"), &settings);
//! let baseline = build_strategy(&StrategySpec::new("BASELINE", "baseline"), &settings);
//!
//! let result = run_match(mcts, baseline, &mut pool, &RulesConfig::default().with_target_score(3)).unwrap();
//! assert!(result.winner == "mcts" || result.winner == "baseline");
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod mcts;
pub mod strategy;
pub mod play;

// Re-export commonly used types
pub use crate::core::{Action, GameRng, PlayerId, PlayerMap, RulesConfig, TrucoError};

pub use crate::cards::{Card, Deck, DeckPool, Rank, Suit};

pub use crate::rules::{GameResult, GameState, GameStateBuilder, Phase};

pub use crate::mcts::{MCTSConfig, MCTSSearch, SearchStats};

pub use crate::strategy::{
    build_strategy, BaselineStrategy, MonteCarloStrategy, RandomStrategy, Strategy,
    StrategyKind, StrategySettings, StrategySpec,
};

pub use crate::play::{run_match, Match, MatchResult, SeatSummary};
