//! `--config` file: one JSON document with a section per stage.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use workforce_gen::{PerformanceConfig, ProfileConfig};
use workforce_noise::NoiseConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkforceConfig {
    pub profiles: ProfileConfig,
    pub performance: PerformanceConfig,
    pub noise: NoiseConfig,
}

impl WorkforceConfig {
    /// Reads `path`, or returns the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str::<WorkforceConfig>(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => WorkforceConfig::default(),
        };
        config.performance.reference_year = config.profiles.reference_year;
        Ok(config)
    }

    /// Applies `--employees` / `--seed` on top of the file.
    pub fn with_overrides(mut self, employees: Option<usize>, seed: Option<u64>) -> Self {
        if let Some(employees) = employees {
            self.profiles.employees = employees;
        }
        if let Some(seed) = seed {
            self.profiles.seed = seed;
            self.performance.seed = seed;
            self.noise.seed = seed;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.profiles.validate().context("invalid profile settings")?;
        self.noise.rates.validate().context("invalid noise settings")?;
        Ok(())
    }
}
