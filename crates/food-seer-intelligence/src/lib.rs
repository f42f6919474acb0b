// ABOUTME: Preference-driven food recommendation engine for FoodSeer
// ABOUTME: Filters catalog snapshots by budget bucket and expanded dietary restrictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

#![deny(unsafe_code)]

//! # FoodSeer Intelligence
//!
//! Turns a user's stored preferences into a view of the catalog:
//!
//! - **recommendations**: budget bucketing, the allergen expansion table and
//!   the [`PreferenceFilter`] that composes them
//! - **preferences**: the immutable draft behind the two-step preference wizard
//! - **config**: price thresholds with opt-in environment overrides
//!
//! Filtering is a pure, synchronous transform. Malformed preference text never
//! fails; it degrades to "no filtering" for the affected stage.

/// Engine configuration (budget thresholds)
pub mod config;

/// Preference wizard draft
pub mod preferences;

/// Budget, allergen and combined filtering
pub mod recommendations;

pub use config::{BudgetThresholds, ConfigError, PreferenceFilterConfig};
pub use preferences::{BudgetOption, DietaryOption, PreferencesDraft};
pub use recommendations::{
    recommend_foods, AllergenTag, BudgetBucket, DietLabel, FoodVerdict, PreferenceFilter,
    RestrictionSet,
};
