// ABOUTME: Preference filter configuration with budget bucket price thresholds
// ABOUTME: Loads defaults, applies environment overrides, and validates ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

//! Preference Filter Configuration
//!
//! The keyword vocabulary of the budget buckets is fixed; only the price
//! boundaries between them are configurable. Configuration is
//! environment-only:
//!
//! - `FOOD_SEER_BUDGET_CEILING`: budget bucket keeps `price < ceiling` (default 10)
//! - `FOOD_SEER_PREMIUM_FLOOR`: premium bucket keeps `price > floor` (default 20)
//!
//! The moderate bucket is the closed range between the two.
//!
//! Filters never read this on their own; callers opt in with
//! `PreferenceFilter::with_thresholds(PreferenceFilterConfig::global().budget)`.

use super::error::ConfigError;
use food_seer_core::constants::{defaults, env_config};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PREFERENCE_FILTER_CONFIG: OnceLock<PreferenceFilterConfig> = OnceLock::new();

/// Price boundaries between budget buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetThresholds {
    /// Exclusive upper bound of the budget bucket, inclusive lower bound of moderate
    pub budget_ceiling: f64,
    /// Inclusive upper bound of the moderate bucket, exclusive lower bound of premium
    pub premium_floor: f64,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self {
            budget_ceiling: defaults::BUDGET_CEILING,
            premium_floor: defaults::PREMIUM_FLOOR,
        }
    }
}

/// Preference filter configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceFilterConfig {
    /// Budget bucket price boundaries
    pub budget: BudgetThresholds,
}

impl PreferenceFilterConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PREFERENCE_FILTER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load preference filter config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting thresholds fail validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold is not finite, not positive, or the
    /// budget ceiling exceeds the premium floor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BudgetThresholds {
            budget_ceiling,
            premium_floor,
        } = self.budget;

        if !budget_ceiling.is_finite() || !premium_floor.is_finite() {
            return Err(ConfigError::InvalidRange(
                "budget thresholds must be finite numbers",
            ));
        }
        if budget_ceiling <= 0.0 {
            return Err(ConfigError::InvalidRange("budget_ceiling must be > 0"));
        }
        if budget_ceiling > premium_floor {
            return Err(ConfigError::InvalidRange(
                "budget_ceiling must be <= premium_floor",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(env_config::BUDGET_CEILING, &mut self.budget.budget_ceiling)?;
        Self::apply_env_var(env_config::PREMIUM_FLOOR, &mut self.budget.premium_floor)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PreferenceFilterConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.budget.budget_ceiling - 10.0).abs() < f64::EPSILON);
        assert!((config.budget.premium_floor - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let config = PreferenceFilterConfig {
            budget: BudgetThresholds {
                budget_ceiling: 25.0,
                premium_floor: 20.0,
            },
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_non_finite_thresholds_rejected() {
        let config = PreferenceFilterConfig {
            budget: BudgetThresholds {
                budget_ceiling: f64::NAN,
                premium_floor: 20.0,
            },
        };
        assert!(config.validate().is_err());
    }
}
