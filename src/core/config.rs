//! Match rules configuration.
//!
//! The rules engine itself is fixed (Truco Paulista, heads-up); the
//! configuration only carries the knobs that change how long a match runs.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::TrucoError;

/// Points a hand is worth before any raise.
pub const BASE_STAKE: u32 = 1;

/// Highest stake the raise ladder reaches.
pub const MAX_STAKE: u32 = 12;

/// Rules configuration for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Points needed to win the match (default: 12).
    /// While either seat sits one point short of it, raising is disabled.
    #[serde(deserialize_with = "positive_target")]
    pub target_score: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { target_score: 12 }
    }
}

fn positive_target<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let target = u32::deserialize(deserializer)?;
    if target == 0 {
        return Err(D::Error::custom("target score must be positive"));
    }
    Ok(target)
}

impl RulesConfig {
    /// Create a config with a custom target score.
    pub fn with_target_score(mut self, target: u32) -> Self {
        assert!(target > 0, "target score must be positive");
        self.target_score = target;
        self
    }

    /// Check that a match under these rules can finish.
    pub fn validate(&self) -> Result<(), TrucoError> {
        if self.target_score == 0 {
            return Err(TrucoError::Precondition(
                "target score must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Upper bound on actions in a complete match.
    ///
    /// Every hand awards at least one point and takes at most six card plays,
    /// four raises and four answers.
    #[must_use]
    pub fn max_match_actions(&self) -> usize {
        (2 * self.target_score as usize).saturating_sub(1) * 14
    }
}

/// The stake after the next raise, if the ladder allows one.
#[must_use]
pub fn next_stake(stake: u32) -> Option<u32> {
    match stake {
        1 => Some(3),
        3 => Some(6),
        6 => Some(9),
        9 => Some(MAX_STAKE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.target_score, 12);
        assert_eq!(config.max_match_actions(), 23 * 14);
    }

    #[test]
    fn test_stake_ladder() {
        let mut ladder = vec![BASE_STAKE];
        while let Some(next) = next_stake(*ladder.last().unwrap()) {
            ladder.push(next);
        }
        assert_eq!(ladder, vec![1, 3, 6, 9, 12]);
    }

    #[test]
    fn test_serialization_fills_defaults() {
        let config: RulesConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RulesConfig::default());

        let config: RulesConfig = serde_json::from_str(r#"{"target_score": 3}"#).unwrap();
        assert_eq!(config.target_score, 3);
    }

    #[test]
    fn test_zero_target_fails_to_deserialize() {
        let err = serde_json::from_str::<RulesConfig>(r#"{"target_score": 0}"#).unwrap_err();
        assert!(err.to_string().contains("target score must be positive"));

        let literal = RulesConfig { target_score: 0 };
        assert!(matches!(literal.validate(), Err(TrucoError::Precondition(_))));
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "target score must be positive")]
    fn test_zero_target_rejected() {
        let _ = RulesConfig::default().with_target_score(0);
    }
}
