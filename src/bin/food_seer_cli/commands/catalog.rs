// ABOUTME: Catalog command for food-seer-cli
// ABOUTME: Prints the built-in sample catalog as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use food_seer::catalog::sample_catalog;
use food_seer::errors::AppResult;

/// Print the sample catalog
pub fn run() -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(&sample_catalog())?);
    Ok(())
}
