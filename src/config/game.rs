//! Game configuration structure

use serde::{Deserialize, Serialize};

use crate::error::{CommonsError, Result};

/// Immutable parameters for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_initial_fish")]
    pub initial_fish: u64,
    #[serde(default = "default_max_catch_per_turn")]
    pub max_catch_per_turn: u64,
    #[serde(default = "default_min_growth_rate")]
    pub min_growth_rate: f64,
    #[serde(default = "default_max_growth_rate")]
    pub max_growth_rate: f64,
}

fn default_initial_fish() -> u64 {
    100
}

fn default_max_catch_per_turn() -> u64 {
    10
}

fn default_min_growth_rate() -> f64 {
    1.1
}

fn default_max_growth_rate() -> f64 {
    1.5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_fish: default_initial_fish(),
            max_catch_per_turn: default_max_catch_per_turn(),
            min_growth_rate: default_min_growth_rate(),
            max_growth_rate: default_max_growth_rate(),
        }
    }
}

impl GameConfig {
    /// Build a validated configuration
    pub fn new(
        initial_fish: u64,
        max_catch_per_turn: u64,
        min_growth_rate: f64,
        max_growth_rate: f64,
    ) -> Result<Self> {
        let config = Self {
            initial_fish,
            max_catch_per_turn,
            min_growth_rate,
            max_growth_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from JSON, e.g. `{"initial_fish": 50}`.
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the growth-rate invariants
    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [
            ("min_growth_rate", self.min_growth_rate),
            ("max_growth_rate", self.max_growth_rate),
        ] {
            if !rate.is_finite() {
                return Err(CommonsError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, rate
                )));
            }
            if rate < 0.0 {
                return Err(CommonsError::InvalidConfig(format!(
                    "{} must not be negative, got {}",
                    name, rate
                )));
            }
        }

        if self.max_growth_rate < self.min_growth_rate {
            return Err(CommonsError::InvalidConfig(format!(
                "max_growth_rate {} is below min_growth_rate {}",
                self.max_growth_rate, self.min_growth_rate
            )));
        }

        Ok(())
    }
}
