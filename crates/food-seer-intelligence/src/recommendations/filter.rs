// ABOUTME: Preference filter combining budget bucket and restriction set predicates
// ABOUTME: Order-preserving, side-effect-free catalog filtering with per-food verdicts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use super::budget::BudgetBucket;
use super::restrictions::RestrictionSet;
use crate::config::BudgetThresholds;
use food_seer_core::models::{Food, User, UserPreferences};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Why a food was kept or dropped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum FoodVerdict {
    /// Passes both the budget and the allergen stage
    Kept,
    /// Price falls outside the user's budget bucket
    OverBudget {
        /// Bucket the price was tested against
        bucket: BudgetBucket,
        /// Price of the rejected food
        price: f64,
    },
    /// An allergen label matched a restriction token
    ContainsAllergen {
        /// Catalog allergen label as it appears on the food
        allergen: String,
        /// Restriction token it matched
        restriction: String,
    },
}

impl FoodVerdict {
    /// Whether the food survives filtering
    #[must_use]
    pub const fn is_kept(&self) -> bool {
        matches!(self, Self::Kept)
    }
}

/// Stateless filter built from one user's preferences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceFilter {
    budget: BudgetBucket,
    restrictions: RestrictionSet,
    thresholds: BudgetThresholds,
}

impl PreferenceFilter {
    /// Create a filter from already-derived stages with the default thresholds
    #[must_use]
    pub fn new(budget: BudgetBucket, restrictions: RestrictionSet) -> Self {
        Self {
            budget,
            restrictions,
            thresholds: BudgetThresholds::default(),
        }
    }

    /// Build a filter from raw preference text
    #[must_use]
    pub fn from_text(cost_preference: &str, dietary_restrictions: &str) -> Self {
        Self::new(
            BudgetBucket::from_preference(cost_preference),
            RestrictionSet::parse(dietary_restrictions),
        )
    }

    /// Build a filter from a user's stored preferences
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self::from_text(user.cost_preference(), user.dietary_restrictions())
    }

    /// Build a filter from a preferences value
    #[must_use]
    pub fn from_preferences(preferences: &UserPreferences) -> Self {
        Self::from_text(
            &preferences.cost_preference,
            &preferences.dietary_restrictions,
        )
    }

    /// Replace the budget thresholds, e.g. with `PreferenceFilterConfig::global().budget`
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: BudgetThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Budget stage
    #[must_use]
    pub const fn budget(&self) -> &BudgetBucket {
        &self.budget
    }

    /// Allergen stage
    #[must_use]
    pub const fn restrictions(&self) -> &RestrictionSet {
        &self.restrictions
    }

    /// Neither stage restricts anything
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        self.budget.is_unrestricted() && self.restrictions.is_empty()
    }

    /// Explain the outcome for a single food
    ///
    /// The budget stage is reported first; for allergens the first matching
    /// label in catalog order is reported with the first token it matched.
    #[must_use]
    pub fn evaluate(&self, food: &Food) -> FoodVerdict {
        if !self.budget.admits_within(food.price, &self.thresholds) {
            return FoodVerdict::OverBudget {
                bucket: self.budget,
                price: food.price,
            };
        }

        food.allergies
            .iter()
            .find_map(|allergen| {
                self.restrictions
                    .find_match(allergen)
                    .map(|restriction| FoodVerdict::ContainsAllergen {
                        allergen: allergen.clone(),
                        restriction: restriction.to_owned(),
                    })
            })
            .unwrap_or(FoodVerdict::Kept)
    }

    /// Whether a single food survives both stages
    #[must_use]
    pub fn admits(&self, food: &Food) -> bool {
        self.budget.admits_within(food.price, &self.thresholds)
            && !food
                .allergies
                .iter()
                .any(|allergen| self.restrictions.matches(allergen))
    }

    /// Filter a catalog snapshot, preserving relative order
    #[must_use]
    pub fn apply(&self, foods: &[Food]) -> Vec<Food> {
        let kept: Vec<Food> = foods
            .iter()
            .filter(|food| {
                let verdict = self.evaluate(food);
                if !verdict.is_kept() {
                    debug!(food_id = food.id, food = %food.food_name, ?verdict, "food filtered out");
                }
                verdict.is_kept()
            })
            .cloned()
            .collect();

        debug!(
            budget = %self.budget,
            restrictions = self.restrictions.len(),
            total = foods.len(),
            kept = kept.len(),
            "applied preference filter"
        );
        kept
    }

    /// Pair every food with its verdict, preserving order
    #[must_use]
    pub fn explain<'a>(&self, foods: &'a [Food]) -> Vec<(&'a Food, FoodVerdict)> {
        foods.iter().map(|food| (food, self.evaluate(food))).collect()
    }
}

/// Foods from `foods` that match `user`'s stored budget and dietary restrictions
#[must_use]
pub fn recommend_foods(foods: &[Food], user: &User) -> Vec<Food> {
    PreferenceFilter::from_user(user).apply(foods)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: i64, price: f64, allergies: &[&str]) -> Food {
        Food::new(
            id,
            format!("food-{id}"),
            price,
            1,
            allergies.iter().map(|a| (*a).to_owned()).collect(),
        )
    }

    #[test]
    fn test_passthrough_keeps_everything() {
        let filter = PreferenceFilter::from_text("", "");
        assert!(filter.is_passthrough());
        let foods = vec![food(1, 50.0, &["FISH"]), food(2, 1.0, &[])];
        assert_eq!(filter.apply(&foods), foods);
    }

    #[test]
    fn test_budget_reported_before_allergen() {
        let filter = PreferenceFilter::from_text("budget", "vegan");
        let verdict = filter.evaluate(&food(1, 12.0, &["EGGS"]));
        assert!(matches!(
            verdict,
            FoodVerdict::OverBudget {
                bucket: BudgetBucket::Budget,
                ..
            }
        ));
    }

    #[test]
    fn test_allergen_verdict_names_label_and_token() {
        let filter = PreferenceFilter::from_text("", "vegetarian");
        let verdict = filter.evaluate(&food(1, 12.0, &["SOY", "SHELLFISH"]));
        assert_eq!(
            verdict,
            FoodVerdict::ContainsAllergen {
                allergen: "SHELLFISH".to_owned(),
                restriction: "fish".to_owned(),
            }
        );
    }

    #[test]
    fn test_admits_agrees_with_evaluate() {
        let filter = PreferenceFilter::from_text("moderate", "nut, dairy free");
        let foods = [
            food(1, 15.0, &["PEANUTS"]),
            food(2, 15.0, &["SOY"]),
            food(3, 25.0, &[]),
            food(4, 12.0, &["MILK", "DAIRY"]),
        ];
        for f in &foods {
            assert_eq!(filter.admits(f), filter.evaluate(f).is_kept());
        }
        let kept: Vec<i64> = filter.apply(&foods).iter().map(|f| f.id).collect();
        assert_eq!(kept, vec![2]);
    }

    #[test]
    fn test_custom_thresholds_apply() {
        let filter = PreferenceFilter::from_text("cheap", "").with_thresholds(BudgetThresholds {
            budget_ceiling: 5.0,
            premium_floor: 20.0,
        });
        assert!(!filter.admits(&food(1, 6.0, &[])));
        assert!(filter.admits(&food(2, 4.0, &[])));
    }
}
