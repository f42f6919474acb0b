// ABOUTME: Preference-driven catalog filtering for the recommendations view
// ABOUTME: Composes budget bucketing with allergen exclusion expansion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

//! # Recommendations Module
//!
//! Produces the subsequence of a catalog snapshot a user may want. Two
//! independent predicates are combined with logical AND:
//!
//! - **Budget**: the cost preference text is classified into a [`BudgetBucket`]
//! - **Allergens**: the dietary restriction text becomes a [`RestrictionSet`]
//!   and any food whose allergen labels loosely match it is dropped
//!
//! ```text
//! use food_seer_intelligence::recommend_foods;
//!
//! let visible = recommend_foods(&catalog, &user);
//! ```

/// Allergen tags and diet label expansion table
pub mod allergens;
/// Budget bucket classification
pub mod budget;
/// Combined preference filter
pub mod filter;
/// Expanded restriction token set
pub mod restrictions;

pub use allergens::{AllergenTag, DietLabel};
pub use budget::BudgetBucket;
pub use filter::{recommend_foods, FoodVerdict, PreferenceFilter};
pub use restrictions::RestrictionSet;
