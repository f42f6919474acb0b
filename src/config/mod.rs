// ABOUTME: Configuration module for the FoodSeer client tooling
// ABOUTME: Environment-only configuration; filter thresholds live in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

/// REST client settings read from environment variables
pub mod environment;

pub use environment::ClientConfig;
pub use food_seer_intelligence::config::{BudgetThresholds, PreferenceFilterConfig};
