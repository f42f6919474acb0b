// ABOUTME: Core data models exchanged with the FoodSeer REST service
// ABOUTME: Re-exports User, Food and UserPreferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

//! # Data Models
//!
//! Plain data records as the FoodSeer REST service serializes them. Field
//! names follow the service's camelCase JSON. None of these types enforce a
//! vocabulary on free-text fields; interpretation happens in the
//! recommendation engine.

mod food;
mod preferences;
mod user;

pub use food::Food;
pub use preferences::UserPreferences;
pub use user::User;
