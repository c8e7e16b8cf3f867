//! MCTS configuration parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MCTSConfig {
    /// UCB1 exploration constant (default: 1.41).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Random seed for rollouts, expansion order and determinization.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Maximum nodes to allocate in the tree.
    /// The search stops early once the arena reaches this size.
    pub max_nodes: usize,

    /// Maximum plies per rollout (0 = unlimited).
    /// A rollout that hits the cap scores as a loss for the root player.
    pub max_rollout_plies: u32,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 1.41,
            seed: 42,
            max_nodes: 100_000,
            max_rollout_plies: 0,
        }
    }
}

impl MCTSConfig {
    /// Defaults for the determinizing driver: rollouts capped at 1000 plies.
    #[must_use]
    pub fn determinizing() -> Self {
        Self {
            max_rollout_plies: 1000,
            ..Self::default()
        }
    }

    /// Create a new config with custom exploration constant.
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom node limit.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Create a new config with a rollout ply cap.
    #[must_use]
    pub fn with_max_rollout_plies(mut self, plies: u32) -> Self {
        self.max_rollout_plies = plies;
        self
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DalmutiError;

    #[test]
    fn test_defaults() {
        let config = MCTSConfig::default();
        assert_eq!(config.exploration_constant, 1.41);
        assert_eq!(config.max_rollout_plies, 0);
        assert_eq!(MCTSConfig::determinizing().max_rollout_plies, 1000);
    }

    #[test]
    fn test_builders() {
        let config = MCTSConfig::default()
            .with_seed(7)
            .with_exploration(0.5)
            .with_max_nodes(10)
            .with_max_rollout_plies(50);
        assert_eq!(config.seed, 7);
        assert_eq!(config.exploration_constant, 0.5);
        assert_eq!(config.max_nodes, 10);
        assert_eq!(config.max_rollout_plies, 50);
    }

    #[test]
    fn test_partial_json() {
        let config = MCTSConfig::from_json_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.exploration_constant, 1.41);
    }

    #[test]
    fn test_bad_json() {
        let err = MCTSConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, DalmutiError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = MCTSConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DalmutiError::Io(_)));
    }

    #[test]
    fn test_round_trip() {
        let config = MCTSConfig::determinizing().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MCTSConfig::from_json_str(&json).unwrap(), config);
    }
}
