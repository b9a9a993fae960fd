//! Core engine types: seats, RNG, actions, rules configuration, errors.
//!
//! Everything here is shared by the rules engine, the search, and the
//! strategies.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{next_stake, RulesConfig, BASE_STAKE, MAX_STAKE};
pub use action::Action;
pub use error::TrucoError;
