//! Simulation configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides. Values outside the supported bounds are clamped by
//! [`SimulationConfig::normalized`] rather than rejected.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{DEFAULT_STARTING_WEALTH, WealthRules};

pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 150;
pub const MIN_TICK_INTERVAL_MS: u64 = 50;
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;
pub const MIN_STARTING_WEALTH: i32 = 1;
pub const MAX_STARTING_WEALTH: i32 = 1_000_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse the JSON content.
    #[error("failed to parse config JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Wealth of newly born and hand-placed cells
    pub starting_wealth: i32,
    /// Fraction of cells born alive by a randomize
    pub density: f64,
    pub tick_interval_ms: u64,
    pub wealth_rules: WealthRules,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            starting_wealth: DEFAULT_STARTING_WEALTH,
            density: 0.3,
            tick_interval_ms: 200,
            wealth_rules: WealthRules::DEFAULT,
        }
    }
}

impl SimulationConfig {
    /// Load a config from a JSON file and clamp it into bounds
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config.normalized())
    }

    /// Clamp sizes, starting wealth, interval and density into their supported ranges
    pub fn normalized(self) -> Self {
        Self {
            width: clamp_grid_size(self.width),
            height: clamp_grid_size(self.height),
            starting_wealth: clamp_starting_wealth(self.starting_wealth),
            density: if self.density.is_nan() { 0.0 } else { self.density.clamp(0.0, 1.0) },
            tick_interval_ms: clamp_tick_interval(self.tick_interval_ms),
            ..self
        }
    }
}

pub fn clamp_grid_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

pub fn clamp_tick_interval(ms: u64) -> u64 {
    ms.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS)
}

/// A newborn must hold positive wealth, or it would be alive at a fatal balance
pub fn clamp_starting_wealth(wealth: i32) -> i32 {
    wealth.clamp(MIN_STARTING_WEALTH, MAX_STARTING_WEALTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.starting_wealth, 10);
        assert_eq!(config.wealth_rules, WealthRules::DEFAULT);
        assert_eq!(config.clone().normalized(), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            SimulationConfig::from_json(r#"{ "width": 40, "starting_wealth": 20 }"#).unwrap();
        assert_eq!(config.width, 40);
        assert_eq!(config.height, 30);
        assert_eq!(config.starting_wealth, 20);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = SimulationConfig::from_json(
            r#"{ "width": 1, "height": 999, "density": 3.5, "tick_interval_ms": 5 }"#,
        )
        .unwrap();
        assert_eq!(config.width, MIN_GRID_SIZE);
        assert_eq!(config.height, MAX_GRID_SIZE);
        assert_eq!(config.density, 1.0);
        assert_eq!(config.tick_interval_ms, MIN_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_starting_wealth_is_clamped() {
        let broke = SimulationConfig::from_json(r#"{ "starting_wealth": 0 }"#).unwrap();
        assert_eq!(broke.starting_wealth, MIN_STARTING_WEALTH);
        let negative = SimulationConfig::from_json(r#"{ "starting_wealth": -7 }"#).unwrap();
        assert_eq!(negative.starting_wealth, MIN_STARTING_WEALTH);
        let huge = SimulationConfig::from_json(r#"{ "starting_wealth": 2147483647 }"#).unwrap();
        assert_eq!(huge.starting_wealth, MAX_STARTING_WEALTH);
    }

    #[test]
    fn test_rules_must_have_seven_entries() {
        let err = SimulationConfig::from_json(r#"{ "wealth_rules": [1, 2, 3] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationConfig::from_json_file("/nonexistent/hex_wealth.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
