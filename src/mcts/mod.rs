//! Monte Carlo Tree Search over Truco positions.
//!
//! ## Overview
//!
//! Plain UCT over the full game state:
//!
//! - **Arena tree**: nodes hold their position and refer to each other by `NodeId`
//! - **Fixed perspective**: every tally is read from the root's match player
//! - **Random rollouts**: leaves are scored by playing the match out uniformly at random
//! - **Deterministic**: the same seed and position give the same search
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use truco_mcts::cards::Deck;
//! use truco_mcts::core::RulesConfig;
//! use truco_mcts::mcts::{MCTSConfig, MCTSSearch};
//! use truco_mcts::rules::GameState;
//!
//! let state = GameState::new(Arc::new(Deck::with_seed(7)), RulesConfig::default());
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(200));
//!
//! let action = search.search(&state).unwrap();
//! assert!(state.is_legal(&action));
//!
//! for (action, visits) in search.action_visits() {
//!     println!("{action}: {visits}");
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::{FinalSelection, MCTSConfig};
pub use node::{MCTSNode, NodeId};
pub use policy::{ucb1_score, RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
