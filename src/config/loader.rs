//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payout
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayoutConfig, RateTable, RoundingPolicy};

/// Loads and provides access to the payout configuration.
///
/// The configuration file has the following shape; both sections are
/// optional and fall back to the built-in schedule and per-record rounding:
///
/// ```text
/// rates:
///   basic:
///     - { min_age: 0,  rate: "72.50" }
///     - { min_age: 18, rate: "81.00" }
///   meal: "5.50"
///   travel_per_km: "1.09"
///   fuel_per_day: "1.00"
/// rounding: per_record
/// ```
///
/// # Example
///
/// ```no_run
/// use student_payout::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payout.yaml").unwrap();
/// println!("Meal allowance: ${}", loader.rates().meal_allowance());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayoutConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns an error if the file is missing, is not valid YAML, or holds a
    /// rate table whose thresholds are not strictly ascending.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PayoutConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %path_str,
            tiers = config.rates.tiers().len(),
            rounding = ?config.rounding,
            "Loaded payout configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayoutConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayoutConfig {
        &self.config
    }

    /// Returns the allowance schedule.
    pub fn rates(&self) -> &RateTable {
        &self.config.rates
    }

    /// Returns the configured rounding policy.
    pub fn rounding(&self) -> RoundingPolicy {
        self.config.rounding
    }

    /// Replaces the rounding policy, e.g. from a command line override.
    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.config.rounding = rounding;
        self
    }
}
