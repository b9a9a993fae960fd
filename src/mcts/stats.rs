//! Search counters, per search and summed over a match.

use serde::{Deserialize, Serialize};

/// Counters of one MCTS search, or of several added together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Searches that built a tree. Decisions with a single legal action
    /// skip the search and are not counted.
    pub searches: u32,

    pub iterations: u32,

    /// Children added to the tree.
    pub nodes_expanded: u32,

    /// Random rollouts played to the end of the match.
    pub simulations: u32,

    /// Iterations whose selection ended on a finished match.
    pub terminal_hits: u32,

    /// Deepest child created, in plies below the root.
    pub max_depth: u16,

    /// Wall-clock time (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add another search's counters to these.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.searches += other.searches;
        self.iterations += other.iterations;
        self.nodes_expanded += other.nodes_expanded;
        self.simulations += other.simulations;
        self.terminal_hits += other.terminal_hits;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.time_us += other.time_us;
    }

    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.searches, 0);
        assert_eq!(stats.terminal_hits, 0);
        assert_eq!(stats.iterations_per_second(), 0.0);
    }

    #[test]
    fn test_absorb_sums_counters() {
        let first = SearchStats {
            searches: 1,
            iterations: 600,
            nodes_expanded: 590,
            simulations: 590,
            terminal_hits: 10,
            max_depth: 9,
            time_us: 250_000,
        };
        let second = SearchStats {
            searches: 1,
            iterations: 400,
            max_depth: 4,
            time_us: 750_000,
            ..SearchStats::default()
        };

        let mut total = SearchStats::new();
        total.absorb(&first);
        total.absorb(&second);

        assert_eq!(total.searches, 2);
        assert_eq!(total.iterations, 1000);
        assert_eq!(total.terminal_hits, 10);
        assert_eq!(total.max_depth, 9);
        assert_eq!(total.iterations_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.iterations = 100;
        stats.max_depth = 7;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
