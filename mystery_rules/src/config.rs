//! Scenario configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RulesResult;

/// Tunables for one game session.
///
/// Every field has a default, so a partial TOML file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Name of the room that counts as "outside" for location hints.
    pub outdoor_room: String,

    /// Chance per tick (0.0 - 1.0) that an idle NPC tries to wander.
    pub move_chance: f64,

    /// Number of ticks a single tile step takes.
    pub walk_ticks: u32,

    /// RNG seed. None = seeded from entropy.
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            outdoor_room: "Outside Ron Cooke Hub".to_string(),
            move_chance: 0.01,
            walk_ticks: 8,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> RulesResult<Self> {
        let mut config: ScenarioConfig = toml::from_str(text)?;
        config.move_chance = config.move_chance.clamp(0.0, 1.0);
        config.walk_ticks = config.walk_ticks.max(1);
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> RulesResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;

    #[test]
    fn test_default_config() {
        let config = ScenarioConfig::default();
        assert_eq!(config.outdoor_room, "Outside Ron Cooke Hub");
        assert!((config.move_chance - 0.01).abs() < f64::EPSILON);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config =
            ScenarioConfig::from_toml_str("seed = 42\noutdoor_room = \"Courtyard\"").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.outdoor_room, "Courtyard");
        assert_eq!(config.walk_ticks, 8);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let config = ScenarioConfig::from_toml_str("move_chance = 3.0\nwalk_ticks = 0").unwrap();
        assert_eq!(config.move_chance, 1.0);
        assert_eq!(config.walk_ticks, 1);
    }

    #[test]
    fn test_malformed_toml() {
        let err = ScenarioConfig::from_toml_str("seed = \"soon\"").unwrap_err();
        assert!(matches!(err, RulesError::MalformedConfig(_)));
    }
}
