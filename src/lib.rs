// ABOUTME: Main library entry point for the FoodSeer recommendation tooling
// ABOUTME: Wires the recommendation engine to the REST client, sample catalog and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

#![deny(unsafe_code)]

//! # FoodSeer
//!
//! Preference-driven food recommendations for the FoodSeer ordering service.
//! Given a user's stored cost preference and dietary restrictions and a
//! catalog snapshot, the engine returns the foods the user may want.
//!
//! ## Architecture
//!
//! - **food-seer-core**: errors, constants and the `User`/`Food` models
//! - **food-seer-intelligence**: budget bucketing, allergen expansion, the
//!   preference filter and the preferences wizard draft
//! - **client**: async REST client for the FoodSeer service
//! - **catalog**: the built-in sample catalog and JSON file loaders
//! - **config** / **logging**: environment-driven configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust
//! use food_seer::catalog::sample_catalog;
//! use food_seer::intelligence::recommend_foods;
//! use food_seer::models::User;
//!
//! let user = User::new("sam", "budget", "vegan");
//! let foods = recommend_foods(&sample_catalog(), &user);
//! assert!(foods.iter().all(|food| food.price < 10.0));
//! ```

/// Sample catalog and local JSON loaders
pub mod catalog;

/// REST client for the FoodSeer service
pub mod client;

/// Environment-driven client configuration
pub mod config;

/// Structured logging setup
pub mod logging;

// Re-export the workspace crates under their domain names
pub use food_seer_core::{constants, errors, models};
pub use food_seer_intelligence as intelligence;
