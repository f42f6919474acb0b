// ABOUTME: Restriction set expanded from a user's comma-separated dietary text
// ABOUTME: Holds verbatim tokens plus expanded allergen tags and performs loose matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use super::allergens::{AllergenTag, DietLabel};
use std::collections::BTreeSet;

/// Lowercase restriction tokens derived from dietary restriction text
///
/// Built fresh for every filter call. Contains every trimmed, lowercased,
/// non-empty comma-separated token verbatim, plus the canonical name of each
/// allergen tag excluded by a diet label the tokens trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionSet {
    tokens: BTreeSet<String>,
    diets: BTreeSet<DietLabel>,
    excluded: BTreeSet<AllergenTag>,
}

impl RestrictionSet {
    /// Parse and expand dietary restriction text such as `"Vegan, nut"`
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut set = Self::default();

        for token in text
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
        {
            for diet in DietLabel::detect(&token) {
                set.diets.insert(diet);
                set.excluded.extend(diet.excluded_tags().iter().copied());
            }
            set.tokens.insert(token);
        }

        set.tokens
            .extend(set.excluded.iter().map(|tag| tag.as_str().to_owned()));
        set
    }

    /// No restrictions at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of distinct restriction tokens after expansion
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the exact lowercase token is in the set
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Restriction tokens in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Diet labels recognized in the source text
    #[must_use]
    pub const fn diet_labels(&self) -> &BTreeSet<DietLabel> {
        &self.diets
    }

    /// Allergen tags added by diet expansion
    #[must_use]
    pub const fn excluded_tags(&self) -> &BTreeSet<AllergenTag> {
        &self.excluded
    }

    /// First restriction token that loosely matches a catalog allergen label
    ///
    /// A match is a substring relation in either direction between the
    /// lowercased label and the token. An empty label is contained in every
    /// token, so it matches whenever the set is non-empty.
    #[must_use]
    pub fn find_match(&self, allergen: &str) -> Option<&str> {
        let allergen = allergen.to_lowercase();
        self.iter()
            .find(|restriction| allergen.contains(restriction) || restriction.contains(&allergen))
    }

    /// Whether a catalog allergen label matches any restriction
    #[must_use]
    pub fn matches(&self, allergen: &str) -> bool {
        self.find_match(allergen).is_some()
    }
}
