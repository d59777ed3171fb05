use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Species the AI opponent draws its team from, in the order they are
/// shuffled from.
pub const POPULAR_SPECIES: [u32; 15] = [6, 9, 3, 25, 150, 149, 130, 143, 94, 65, 131, 59, 38, 68, 76];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_team_size: usize,
    pub default_level: u8,
    pub weather_turns: u8,
    /// Log lines included in a snapshot.
    pub log_tail: usize,
    pub max_presets: usize,
    pub ai_pool: Vec<u32>,
    /// Base seed for match RNGs. Unset means a fresh random base per service.
    pub seed: Option<u64>,
    /// Turn cap for AI-vs-AI simulations.
    pub max_turns: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_team_size: 1,
            default_level: 50,
            weather_turns: 5,
            log_tail: 10,
            max_presets: 10,
            ai_pool: POPULAR_SPECIES.to_vec(),
            seed: None,
            max_turns: 500,
        }
    }
}

impl EngineConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("Failed to parse engine config JSON")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid config in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = EngineConfig::from_json(r#"{"log_tail": 3, "seed": 42}"#).unwrap();
        assert_eq!(config.log_tail, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.default_level, 50);
        assert_eq!(config.ai_pool, POPULAR_SPECIES.to_vec());
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(EngineConfig::from_json("{\"log_tail\": \"many\"}").is_err());
    }
}
