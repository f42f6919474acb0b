// ABOUTME: Closed allergen tag set and the diet label expansion table
// ABOUTME: Maps recognized diets (vegan, pescatarian, ...) to the allergen tags they exclude
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

//! # Allergen Taxonomy
//!
//! Diet labels are recognized inside restriction tokens by substring
//! triggers and expand into a fixed list of [`AllergenTag`]s. The table is
//! intentionally over-inclusive: "nut" triggers the nut-allergy expansion
//! for "peanut" and "nut-free" alike.
//!
//! Two entries look asymmetric and are kept as they are: pescatarian does
//! not exclude fish, and vegan excludes honey even though no catalog item is
//! tagged with it today.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical allergen tags produced by diet expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergenTag {
    /// Milk products
    Dairy,
    /// Milk sugar
    Lactose,
    /// Egg products
    Eggs,
    /// Meat in general
    Meat,
    /// Beef
    Beef,
    /// Pork
    Pork,
    /// Poultry in general
    Poultry,
    /// Chicken
    Chicken,
    /// Finned fish
    Fish,
    /// Crustaceans and mollusks
    Shellfish,
    /// Honey
    Honey,
    /// Animal-derived gelatin
    Gelatin,
    /// Gluten
    Gluten,
    /// Wheat
    Wheat,
    /// Barley
    Barley,
    /// Rye
    Rye,
    /// Nuts in general
    Nuts,
    /// Peanuts
    Peanuts,
    /// Tree nuts
    TreeNuts,
    /// Almonds
    Almonds,
}

impl AllergenTag {
    /// Every tag, in declaration order
    pub const ALL: [Self; 20] = [
        Self::Dairy,
        Self::Lactose,
        Self::Eggs,
        Self::Meat,
        Self::Beef,
        Self::Pork,
        Self::Poultry,
        Self::Chicken,
        Self::Fish,
        Self::Shellfish,
        Self::Honey,
        Self::Gelatin,
        Self::Gluten,
        Self::Wheat,
        Self::Barley,
        Self::Rye,
        Self::Nuts,
        Self::Peanuts,
        Self::TreeNuts,
        Self::Almonds,
    ];

    /// Lowercase name used when matching against catalog allergen labels
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Lactose => "lactose",
            Self::Eggs => "eggs",
            Self::Meat => "meat",
            Self::Beef => "beef",
            Self::Pork => "pork",
            Self::Poultry => "poultry",
            Self::Chicken => "chicken",
            Self::Fish => "fish",
            Self::Shellfish => "shellfish",
            Self::Honey => "honey",
            Self::Gelatin => "gelatin",
            Self::Gluten => "gluten",
            Self::Wheat => "wheat",
            Self::Barley => "barley",
            Self::Rye => "rye",
            Self::Nuts => "nuts",
            Self::Peanuts => "peanuts",
            Self::TreeNuts => "tree nuts",
            Self::Almonds => "almonds",
        }
    }
}

impl fmt::Display for AllergenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diet or allergy recognized inside a restriction token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietLabel {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No dairy
    LactoseIntolerant,
    /// No gluten-bearing grains
    GlutenFree,
    /// No nuts of any kind
    NutAllergy,
    /// No meat; fish allowed
    Pescatarian,
}

use AllergenTag::{
    Almonds, Barley, Beef, Chicken, Dairy, Eggs, Fish, Gelatin, Gluten, Honey, Lactose, Meat,
    Nuts, Peanuts, Pork, Poultry, Rye, Shellfish, TreeNuts, Wheat,
};

const VEGAN_EXCLUDES: &[AllergenTag] = &[
    Dairy, Lactose, Eggs, Meat, Beef, Pork, Poultry, Chicken, Fish, Shellfish, Honey, Gelatin,
];
const VEGETARIAN_EXCLUDES: &[AllergenTag] =
    &[Meat, Beef, Pork, Poultry, Chicken, Fish, Shellfish, Gelatin];
const LACTOSE_EXCLUDES: &[AllergenTag] = &[Dairy, Lactose];
const GLUTEN_EXCLUDES: &[AllergenTag] = &[Gluten, Wheat, Barley, Rye];
const NUT_EXCLUDES: &[AllergenTag] = &[Nuts, Peanuts, TreeNuts, Almonds];
const PESCATARIAN_EXCLUDES: &[AllergenTag] = &[Meat, Beef, Pork, Poultry, Chicken];

impl DietLabel {
    /// Every label, in expansion table order
    pub const ALL: [Self; 6] = [
        Self::Vegan,
        Self::Vegetarian,
        Self::LactoseIntolerant,
        Self::GlutenFree,
        Self::NutAllergy,
        Self::Pescatarian,
    ];

    /// Whether a lowercase, trimmed restriction token triggers this label
    #[must_use]
    pub fn is_triggered_by(&self, token: &str) -> bool {
        match self {
            Self::Vegan => token.contains("vegan"),
            Self::Vegetarian => token.contains("vegetarian"),
            Self::LactoseIntolerant => token.contains("lactose") || token == "dairy free",
            Self::GlutenFree => token.contains("gluten free") || token.contains("celiac"),
            Self::NutAllergy => token.contains("nut"),
            Self::Pescatarian => token.contains("pescatarian"),
        }
    }

    /// Allergen tags excluded by this label
    #[must_use]
    pub const fn excluded_tags(&self) -> &'static [AllergenTag] {
        match self {
            Self::Vegan => VEGAN_EXCLUDES,
            Self::Vegetarian => VEGETARIAN_EXCLUDES,
            Self::LactoseIntolerant => LACTOSE_EXCLUDES,
            Self::GlutenFree => GLUTEN_EXCLUDES,
            Self::NutAllergy => NUT_EXCLUDES,
            Self::Pescatarian => PESCATARIAN_EXCLUDES,
        }
    }

    /// All labels triggered by a lowercase, trimmed restriction token
    pub fn detect(token: &str) -> impl Iterator<Item = Self> + '_ {
        Self::ALL
            .into_iter()
            .filter(move |label| label.is_triggered_by(token))
    }

    /// Human-readable name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::LactoseIntolerant => "lactose intolerant",
            Self::GlutenFree => "gluten free",
            Self::NutAllergy => "nut allergy",
            Self::Pescatarian => "pescatarian",
        }
    }
}

impl fmt::Display for DietLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
