use serde::{Deserialize, Serialize};
use workforce_gen::config::probability;
use workforce_model::ConfigError;

/// Per-cell / per-row corruption probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseRates {
    pub missing: f64,
    pub typo: f64,
    pub confusion: f64,
    pub drop: f64,
}

impl Default for NoiseRates {
    fn default() -> Self {
        Self {
            missing: 0.02,
            typo: 0.05,
            confusion: 0.02,
            drop: 0.02,
        }
    }
}

impl NoiseRates {
    /// No corruption at all.
    pub fn none() -> Self {
        Self {
            missing: 0.0,
            typo: 0.0,
            confusion: 0.0,
            drop: 0.0,
        }
    }

    pub fn with_drop(mut self, drop: f64) -> Self {
        self.drop = drop;
        self
    }

    /// Keeps only missing values and row drops.
    pub fn missing_and_drop_only(self) -> Self {
        Self {
            typo: 0.0,
            confusion: 0.0,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        probability("noise.missing", self.missing)?;
        probability("noise.typo", self.typo)?;
        probability("noise.confusion", self.confusion)?;
        probability("noise.drop", self.drop)
    }
}

/// Noise stage settings: the stream seeds plus default rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub seed: u64,
    /// Seed of the name stream used when names are regenerated.
    pub name_seed: u64,
    #[serde(flatten)]
    pub rates: NoiseRates,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 5,
            name_seed: 1321,
            rates: NoiseRates::default(),
        }
    }
}
