// ABOUTME: Catalog food item model with price, stock count and allergen labels
// ABOUTME: Serialized with the camelCase field names used by the REST service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use serde::{Deserialize, Serialize};

/// A single catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Unique catalog identifier
    pub id: i64,
    /// Display name
    pub food_name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Units in stock
    pub amount: u32,
    /// Free-text allergen labels in catalog order
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl Food {
    /// Create a food item, clamping a negative price to zero
    #[must_use]
    pub fn new(
        id: i64,
        food_name: impl Into<String>,
        price: f64,
        amount: u32,
        allergies: Vec<String>,
    ) -> Self {
        Self {
            id,
            food_name: food_name.into(),
            price: price.max(0.0),
            amount,
            allergies,
        }
    }

    /// Whether the allergen list is non-empty
    #[must_use]
    pub fn has_allergens(&self) -> bool {
        !self.allergies.is_empty()
    }

    /// Whether the item is currently in stock
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.amount > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_json() {
        let food: Food = serde_json::from_str(
            r#"{"id":3,"foodName":"BAGEL","price":4,"amount":30,"allergies":["GLUTEN","WHEAT"]}"#,
        )
        .unwrap();
        assert_eq!(food.food_name, "BAGEL");
        assert!((food.price - 4.0).abs() < f64::EPSILON);
        assert_eq!(food.allergies, vec!["GLUTEN", "WHEAT"]);
    }

    #[test]
    fn test_missing_allergies_defaults_to_empty() {
        let food: Food =
            serde_json::from_str(r#"{"id":1,"foodName":"APPLE","price":2,"amount":50}"#).unwrap();
        assert!(food.allergies.is_empty());
        assert!(!food.has_allergens());
    }

    #[test]
    fn test_blank_allergen_labels_still_count() {
        let food = Food::new(1, "TEA", 2.0, 40, vec!["  ".to_owned()]);
        assert!(food.has_allergens());
    }

    #[test]
    fn test_negative_price_is_clamped() {
        let food = Food::new(1, "FREEBIE", -3.0, 0, Vec::new());
        assert!(food.price.abs() < f64::EPSILON);
        assert!(!food.in_stock());
    }
}
