// ABOUTME: Configuration module for the food-seer-intelligence crate
// ABOUTME: Re-exports preference filter configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

/// Configuration error types
pub mod error;
/// Budget thresholds and their environment overrides
pub mod preference_filter;

pub use error::ConfigError;
pub use preference_filter::{BudgetThresholds, PreferenceFilterConfig};
