//! Truco rules engine.
//!
//! `GameState` answers the three questions every strategy and the search
//! ask of a position:
//! - which actions are legal
//! - what position an action leads to
//! - whether (and how) the match has ended
//!
//! Positions are values: transitions return new states.

pub mod builder;
pub mod result;
pub mod state;
pub mod trick;

pub use builder::GameStateBuilder;
pub use result::GameResult;
pub use state::{GameState, Hand, Phase, HAND_SIZE};
pub use trick::{hand_winner, resolve_trick, TrickOutcome};
