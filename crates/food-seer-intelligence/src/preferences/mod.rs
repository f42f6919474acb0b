// ABOUTME: Preference wizard state for composing stored user preferences
// ABOUTME: Re-exports the immutable draft and its answer options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

/// Immutable two-step preference draft
pub mod draft;

pub use draft::{BudgetOption, DietaryOption, PreferencesDraft};
