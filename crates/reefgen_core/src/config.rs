//! Generation parameters.
//!
//! Maps onto the `[generation]` table of `config.toml`. Every field has a
//! default, so a partial table only overrides what it names.
//!
//! ```toml
//! [generation]
//! width = 80
//! height = 45
//! fill_percent = 60
//! use_random_seed = false
//! seed = "S1"
//!
//! [generation.tuning]
//! seaweed_dieback = 4
//! ```
//!
//! Percentages are cosmetic knobs: values outside `[0, 100]` are clamped with
//! a warning instead of failing the run. Zero dimensions are fatal.

use crate::error::{GenError, Result};
use crate::rng::SeedMode;
use serde::{Deserialize, Serialize};

/// Neighbourhood thresholds for the three automata.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AutomatonTuning {
    /// Water becomes coral when at least this many corals are in the 3x3 window.
    pub coral_birth_pressure: u8,
    /// ...and no more than this many in the 5x5 window.
    pub coral_birth_ceiling: u8,
    /// Coral dies back to water at or below this 3x3 coral count.
    pub coral_starve_pressure: u8,
    /// Coral dies back to water above this 5x5 coral count.
    pub coral_crowd_ceiling: u8,
    pub water_moore3_threshold: u8,
    pub water_moore5_threshold: u8,
    /// Seaweed dies back when this many orthogonal neighbours are seaweed.
    pub seaweed_dieback: u8,
    /// Water becomes seaweed when this many 3x3 neighbours are seaweed.
    pub seaweed_spread: u8,
}

impl Default for AutomatonTuning {
    fn default() -> Self {
        Self {
            coral_birth_pressure: 4,
            coral_birth_ceiling: 18,
            coral_starve_pressure: 1,
            coral_crowd_ceiling: 18,
            water_moore3_threshold: 5,
            water_moore5_threshold: 18,
            seaweed_dieback: 2,
            seaweed_spread: 4,
        }
    }
}

/// Immutable per-run parameters of the generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: u16,
    pub height: u16,
    pub fill_percent: i32,
    /// Share of filled cells that start as seaweed.
    pub seaweed_percent: i32,
    /// Share of the remaining coral that is yellow; red takes the rest.
    pub yellow_coral_percent: i32,
    pub artefact_count: usize,
    pub coral_iterations: usize,
    pub water_iterations: usize,
    pub seaweed_iterations: usize,
    pub use_random_seed: bool,
    pub seed: String,
    pub tuning: AutomatonTuning,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 45,
            fill_percent: 60,
            seaweed_percent: 50,
            yellow_coral_percent: 80,
            artefact_count: 5,
            coral_iterations: 25,
            water_iterations: 10,
            seaweed_iterations: 25,
            use_random_seed: true,
            seed: String::new(),
            tuning: AutomatonTuning::default(),
        }
    }
}

/// Percentages after clamping, ready for `0..100` rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillPercentages {
    pub fill: u8,
    pub seaweed: u8,
    pub yellow_coral: u8,
}

fn clamp_percent(name: &str, value: i32) -> i32 {
    let clamped = value.clamp(0, 100);
    if clamped != value {
        tracing::warn!("{} = {} outside [0, 100], clamped to {}", name, value, clamped);
    }
    clamped
}

impl GenerationConfig {
    /// Convenience constructor for a fixed-seed configuration.
    pub fn seeded(seed: impl Into<String>) -> Self {
        Self {
            use_random_seed: false,
            seed: seed.into(),
            ..Self::default()
        }
    }

    /// Fails on configurations that cannot produce a grid.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GenError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Copy with every percentage clamped into `[0, 100]`.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            fill_percent: clamp_percent("fill_percent", self.fill_percent),
            seaweed_percent: clamp_percent("seaweed_percent", self.seaweed_percent),
            yellow_coral_percent: clamp_percent("yellow_coral_percent", self.yellow_coral_percent),
            ..self.clone()
        }
    }

    pub fn percentages(&self) -> FillPercentages {
        FillPercentages {
            fill: self.fill_percent.clamp(0, 100) as u8,
            seaweed: self.seaweed_percent.clamp(0, 100) as u8,
            yellow_coral: self.yellow_coral_percent.clamp(0, 100) as u8,
        }
    }

    pub fn seed_mode(&self) -> SeedMode {
        if self.use_random_seed {
            SeedMode::Random
        } else {
            SeedMode::Fixed(self.seed.clone())
        }
    }

    /// Parses a bare generation table and validates it.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config.sanitized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (80, 45));
    }

    #[test]
    fn test_zero_width_is_fatal() {
        let config = GenerationConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenError::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_percentages_are_clamped_not_rejected() {
        let config = GenerationConfig {
            fill_percent: 140,
            seaweed_percent: -20,
            yellow_coral_percent: 55,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let clean = config.sanitized();
        assert_eq!(clean.fill_percent, 100);
        assert_eq!(clean.seaweed_percent, 0);
        assert_eq!(clean.yellow_coral_percent, 55);
        assert_eq!(
            clean.percentages(),
            FillPercentages {
                fill: 100,
                seaweed: 0,
                yellow_coral: 55
            }
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GenerationConfig::from_toml(
            "width = 16\nseed = \"S1\"\nuse_random_seed = false\n[tuning]\nseaweed_dieback = 4\n",
        )
        .unwrap();
        assert_eq!(config.width, 16);
        assert_eq!(config.height, 45);
        assert_eq!(config.tuning.seaweed_dieback, 4);
        assert_eq!(config.tuning.coral_birth_ceiling, 18);
        assert_eq!(config.seed_mode(), SeedMode::Fixed("S1".to_string()));
    }

    #[test]
    fn test_toml_with_zero_height_fails() {
        assert!(GenerationConfig::from_toml("height = 0").is_err());
    }
}
