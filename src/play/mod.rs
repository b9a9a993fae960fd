//! Running matches between strategies.
//!
//! A match is two strategies, one shared deck and the rules config. Both
//! seats (and every search tree they build) read the same `Arc<Deck>`, so
//! replaying a deck replays the card sequence exactly.

mod result;
mod runner;

pub use result::{MatchResult, SeatSummary};
pub use runner::{run_match, Match};
