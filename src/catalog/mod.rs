// ABOUTME: Local catalog sources for recommendations without the REST service
// ABOUTME: Built-in seed catalog and JSON file loaders for foods and users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

/// JSON file loaders
pub mod files;

/// The seed catalog the FoodSeer backend ships with
pub mod sample;

pub use files::{load_foods, load_user};
pub use sample::sample_catalog;
