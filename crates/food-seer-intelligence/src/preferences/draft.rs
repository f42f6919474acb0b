// ABOUTME: Immutable draft of the budget and dietary preference wizard answers
// ABOUTME: Each answer returns a new draft; finish() composes the stored preference text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

//! Preference wizard draft.
//!
//! The wizard asks two questions (budget, then dietary restrictions). The
//! answers are carried as one [`PreferencesDraft`] value handed from step to
//! step; nothing is persisted until the caller takes the result of
//! [`PreferencesDraft::finish`] and saves it in one call.

use food_seer_core::models::UserPreferences;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Answer to the budget question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetOption {
    /// Under $10
    #[serde(rename = "under-10")]
    Under10,
    /// Under $20
    #[serde(rename = "under-20")]
    Under20,
    /// Under $30
    #[serde(rename = "under-30")]
    Under30,
    /// Free-text budget supplied separately
    #[serde(rename = "other")]
    Other,
}

impl BudgetOption {
    /// Every option in display order
    pub const ALL: [Self; 4] = [Self::Under10, Self::Under20, Self::Under30, Self::Other];

    /// Stored value
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Under10 => "under-10",
            Self::Under20 => "under-20",
            Self::Under30 => "under-30",
            Self::Other => "other",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Under10 => "Under $10",
            Self::Under20 => "Under $20",
            Self::Under30 => "Under $30",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for BudgetOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for BudgetOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown budget option '{s}'"))
    }
}

/// Allergen code offered by the dietary restriction question (multi-select)
///
/// Values are the upper-case allergen codes used in the catalog's allergen
/// lists, so a selected code matches the tagged foods directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum DietaryOption {
    /// Milk/Dairy
    Milk,
    /// Lactose
    Lactose,
    /// Eggs
    Eggs,
    /// Fish
    Fish,
    /// Shellfish
    Shellfish,
    /// Tree Nuts
    TreeNuts,
    /// Peanuts
    Peanuts,
    /// Wheat
    Wheat,
    /// Gluten
    Gluten,
    /// Soy
    Soy,
    /// Sesame
    Sesame,
    /// Corn
    Corn,
    /// Sulfites
    Sulfites,
    /// Mustard
    Mustard,
    /// Meat (All)
    Meat,
    /// Beef
    Beef,
    /// Pork
    Pork,
    /// Poultry
    Poultry,
    /// Gelatin
    Gelatin,
    /// Caffeine
    Caffeine,
}

impl DietaryOption {
    /// Every option in display order
    pub const ALL: [Self; 20] = [
        Self::Milk,
        Self::Lactose,
        Self::Eggs,
        Self::Fish,
        Self::Shellfish,
        Self::TreeNuts,
        Self::Peanuts,
        Self::Wheat,
        Self::Gluten,
        Self::Soy,
        Self::Sesame,
        Self::Corn,
        Self::Sulfites,
        Self::Mustard,
        Self::Meat,
        Self::Beef,
        Self::Pork,
        Self::Poultry,
        Self::Gelatin,
        Self::Caffeine,
    ];

    /// Stored value
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Milk => "MILK",
            Self::Lactose => "LACTOSE",
            Self::Eggs => "EGGS",
            Self::Fish => "FISH",
            Self::Shellfish => "SHELLFISH",
            Self::TreeNuts => "TREE-NUTS",
            Self::Peanuts => "PEANUTS",
            Self::Wheat => "WHEAT",
            Self::Gluten => "GLUTEN",
            Self::Soy => "SOY",
            Self::Sesame => "SESAME",
            Self::Corn => "CORN",
            Self::Sulfites => "SULFITES",
            Self::Mustard => "MUSTARD",
            Self::Meat => "MEAT",
            Self::Beef => "BEEF",
            Self::Pork => "PORK",
            Self::Poultry => "POULTRY",
            Self::Gelatin => "GELATIN",
            Self::Caffeine => "CAFFEINE",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Milk => "Milk/Dairy",
            Self::Lactose => "Lactose",
            Self::Eggs => "Eggs",
            Self::Fish => "Fish",
            Self::Shellfish => "Shellfish",
            Self::TreeNuts => "Tree Nuts",
            Self::Peanuts => "Peanuts",
            Self::Wheat => "Wheat",
            Self::Gluten => "Gluten",
            Self::Soy => "Soy",
            Self::Sesame => "Sesame",
            Self::Corn => "Corn",
            Self::Sulfites => "Sulfites",
            Self::Mustard => "Mustard",
            Self::Meat => "Meat (All)",
            Self::Beef => "Beef",
            Self::Pork => "Pork",
            Self::Poultry => "Poultry",
            Self::Gelatin => "Gelatin",
            Self::Caffeine => "Caffeine",
        }
    }
}

impl fmt::Display for DietaryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for DietaryOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown allergen code '{s}'"))
    }
}

/// Wizard answers collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesDraft {
    budget: Option<BudgetOption>,
    custom_budget: String,
    restrictions: Vec<DietaryOption>,
    custom_dietary: String,
}

impl PreferencesDraft {
    /// Empty draft
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a budget option; any option other than `Other` clears the custom budget
    #[must_use]
    pub fn select_budget(mut self, option: BudgetOption) -> Self {
        self.budget = Some(option);
        if option != BudgetOption::Other {
            self.custom_budget.clear();
        }
        self
    }

    /// Set the free-text budget
    #[must_use]
    pub fn custom_budget(mut self, text: impl Into<String>) -> Self {
        self.custom_budget = text.into();
        self
    }

    /// Select or deselect an allergen code
    #[must_use]
    pub fn toggle_restriction(mut self, option: DietaryOption) -> Self {
        if let Some(index) = self.restrictions.iter().position(|r| *r == option) {
            self.restrictions.remove(index);
        } else {
            self.restrictions.push(option);
        }
        self
    }

    /// Set free-text restrictions appended after the selected codes, e.g. `"vegan"`
    #[must_use]
    pub fn custom_dietary(mut self, text: impl Into<String>) -> Self {
        self.custom_dietary = text.into();
        self
    }

    /// Selected budget option
    #[must_use]
    pub const fn budget(&self) -> Option<BudgetOption> {
        self.budget
    }

    /// Selected allergen codes in selection order
    #[must_use]
    pub fn restrictions(&self) -> &[DietaryOption] {
        &self.restrictions
    }

    /// The budget step has an answer
    #[must_use]
    pub fn can_advance_from_budget(&self) -> bool {
        self.budget.is_some() || !self.custom_budget.is_empty()
    }

    /// Compose the preference value to persist
    ///
    /// The cost preference is the custom budget when `Other` is chosen with
    /// non-empty text, otherwise the chosen option's value. Allergen codes
    /// are joined with ", " in selection order, followed by the custom text.
    #[must_use]
    pub fn finish(&self) -> UserPreferences {
        let cost_preference = match self.budget {
            Some(BudgetOption::Other) if !self.custom_budget.is_empty() => {
                self.custom_budget.clone()
            }
            Some(option) => option.value().to_owned(),
            None => String::new(),
        };

        let mut parts: Vec<&str> = self.restrictions.iter().map(DietaryOption::value).collect();
        if !self.custom_dietary.is_empty() {
            parts.push(&self.custom_dietary);
        }

        UserPreferences::new(cost_preference, parts.join(", "))
    }
}
