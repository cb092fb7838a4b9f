use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::state::{
    DEFAULT_ANTAGONISM_STRENGTH, DEFAULT_BASELINE_LEARNING_RATE, DEFAULT_DECAY_RATE,
};

/// Tunable parameters of the emotional dynamics pipeline.
///
/// Defaults match the built-in constants; a TOML file overrides individual
/// fields. All rates are plain multipliers per turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsConfig {
    /// Fraction of the gap toward baseline closed per decay turn.
    pub decay_rate: f32,
    /// Suppression strength for antagonistic emotion pairs.
    pub antagonism_strength: f32,
    /// How fast the mood baseline chases the current state.
    pub baseline_learning_rate: f32,
    /// Scale applied to incoming emotion deltas.
    pub intensity_scale: f32,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            decay_rate: DEFAULT_DECAY_RATE,
            antagonism_strength: DEFAULT_ANTAGONISM_STRENGTH,
            baseline_learning_rate: DEFAULT_BASELINE_LEARNING_RATE,
            intensity_scale: 1.0,
        }
    }
}

impl DynamicsConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let config: DynamicsConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (0.0..1.0).contains(&self.decay_rate),
            "decay_rate must be in [0.0, 1.0), got {}",
            self.decay_rate
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.antagonism_strength),
            "antagonism_strength must be in [0.0, 1.0], got {}",
            self.antagonism_strength
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.baseline_learning_rate),
            "baseline_learning_rate must be in [0.0, 1.0], got {}",
            self.baseline_learning_rate
        );
        anyhow::ensure!(
            self.intensity_scale >= 0.0,
            "intensity_scale must be non-negative, got {}",
            self.intensity_scale
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = DynamicsConfig::default();
        assert_eq!(cfg.decay_rate, 0.15);
        assert_eq!(cfg.antagonism_strength, 0.3);
        assert_eq!(cfg.baseline_learning_rate, 0.1);
        assert_eq!(cfg.intensity_scale, 1.0);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: DynamicsConfig = toml::from_str("decay_rate = 0.25").unwrap();
        assert_eq!(cfg.decay_rate, 0.25);
        assert_eq!(cfg.antagonism_strength, 0.3);
    }

    #[test]
    fn test_validation_rejects_bad_rates() {
        let cfg = DynamicsConfig {
            decay_rate: 1.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let cfg = DynamicsConfig::load_or_default("/nonexistent/animus.toml");
        assert_eq!(cfg, DynamicsConfig::default());
    }
}
