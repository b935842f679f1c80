//! Stage configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides.

use serde::{Deserialize, Serialize};
use workforce_model::{ConfigError, REFERENCE_YEAR};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Population size; 0 yields empty sheets.
    pub employees: usize,
    pub seed: u64,
    /// Seed of the name stream (independent of `seed`).
    pub name_seed: u64,
    pub reference_year: i32,
    /// Lowest possible salary.
    pub basic_income: u64,
    /// Ceiling of the yearly raise, compounded over tenure.
    pub max_annual_raise: f64,
    /// Share of records describing employees who already left.
    pub departed_share: f64,
    /// Upper bound (exclusive) of years since departure.
    pub max_time_left: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            employees: 1000,
            seed: 5,
            name_seed: 1,
            reference_year: REFERENCE_YEAR,
            basic_income: 10_000,
            max_annual_raise: 0.1,
            departed_share: 0.8,
            max_time_left: 20,
        }
    }
}

impl ProfileConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        probability("departed_share", self.departed_share)?;
        if self.basic_income == 0 {
            return Err(ConfigError::NonPositive {
                name: "basic_income".into(),
                value: 0.0,
            });
        }
        if !self.max_annual_raise.is_finite() || self.max_annual_raise < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "max_annual_raise".into(),
                value: self.max_annual_raise,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub seed: u64,
    /// Follows the profile stage's reference year when loaded from a file.
    #[serde(skip)]
    pub reference_year: i32,
    /// Most recent tenure years that get an evaluation.
    pub max_evaluations: u32,
    /// Overtime baseline in hours.
    pub annual_hours: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            seed: 5,
            reference_year: REFERENCE_YEAR,
            max_evaluations: 5,
            annual_hours: workforce_model::performance::ANNUAL_HOURS,
        }
    }
}

pub fn probability(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::BadProbability {
            name: name.to_string(),
            value,
        })
    }
}
