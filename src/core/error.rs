//! Engine error type.
//!
//! Every error here is a logic error: no I/O happens inside the engine, so
//! nothing is retried. Callers abort the current decision or match.

use thiserror::Error;

use super::action::Action;

/// Errors raised by the rules engine, the search, and the match runner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrucoError {
    /// An action not present in `legal_actions()` was applied.
    #[error("illegal action {action} in the current state")]
    IllegalAction { action: Action },

    /// A transition or decision was requested on a finished match.
    #[error("the match is already over")]
    GameOver,

    /// A caller broke an engine contract (malformed root, runaway rollout).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// The shared deck pool had no deck left for a new match.
    #[error("deck pool is exhausted")]
    DeckPoolExhausted,

    /// A card sequence is not exactly the 40-card Truco set.
    #[error("invalid deck: {0}")]
    InvalidDeck(String),

    /// A deck pool could not be encoded or decoded.
    #[error("deck pool serialization failed: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for TrucoError {
    fn from(err: bincode::Error) -> Self {
        TrucoError::Serialization(err.to_string())
    }
}
