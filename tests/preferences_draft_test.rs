// ABOUTME: Integration tests for the two-step preference wizard draft
// ABOUTME: Validates answer transitions, preference composition and filter round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use food_seer::catalog::sample_catalog;
use food_seer::intelligence::{
    BudgetBucket, BudgetOption, DietaryOption, PreferenceFilter, PreferencesDraft,
};
use food_seer::models::{User, UserPreferences};

// ============================================================================
// Budget step
// ============================================================================

#[test]
fn test_empty_draft_cannot_advance() {
    let draft = PreferencesDraft::new();
    assert!(!draft.can_advance_from_budget());
    assert_eq!(draft.finish(), UserPreferences::default());
}

#[test]
fn test_custom_budget_alone_allows_advance() {
    let draft = PreferencesDraft::new().custom_budget("15");
    assert!(draft.can_advance_from_budget());
    assert_eq!(draft.budget(), None);
}

#[test]
fn test_listed_budget_value_is_stored() {
    let preferences = PreferencesDraft::new()
        .select_budget(BudgetOption::Under30)
        .finish();
    assert_eq!(preferences.cost_preference, "under-30");
}

#[test]
fn test_other_budget_with_custom_text() {
    let preferences = PreferencesDraft::new()
        .select_budget(BudgetOption::Other)
        .custom_budget("moderate")
        .finish();
    assert_eq!(preferences.cost_preference, "moderate");
}

#[test]
fn test_transitions_return_new_values() {
    let first = PreferencesDraft::new().select_budget(BudgetOption::Other);
    let second = first.clone().custom_budget("12");
    assert_eq!(first.finish().cost_preference, "other");
    assert_eq!(second.finish().cost_preference, "12");
}

// ============================================================================
// Dietary step
// ============================================================================

#[test]
fn test_restrictions_joined_in_selection_order() {
    let preferences = PreferencesDraft::new()
        .select_budget(BudgetOption::Under10)
        .toggle_restriction(DietaryOption::TreeNuts)
        .toggle_restriction(DietaryOption::Milk)
        .finish();
    assert_eq!(preferences.dietary_restrictions, "TREE-NUTS, MILK");
}

#[test]
fn test_toggle_twice_deselects() {
    let draft = PreferencesDraft::new()
        .toggle_restriction(DietaryOption::Eggs)
        .toggle_restriction(DietaryOption::Eggs);
    assert!(draft.restrictions().is_empty());
    assert_eq!(draft.finish().dietary_restrictions, "");
}

#[test]
fn test_custom_dietary_appended_after_codes() {
    let draft = PreferencesDraft::new()
        .toggle_restriction(DietaryOption::Sesame)
        .custom_dietary("vegan");
    assert_eq!(draft.restrictions(), &[DietaryOption::Sesame]);
    assert_eq!(draft.finish().dietary_restrictions, "SESAME, vegan");

    let custom_only = PreferencesDraft::new().custom_dietary("pescatarian");
    assert_eq!(custom_only.finish().dietary_restrictions, "pescatarian");
}

#[test]
fn test_every_code_parses_from_its_value() {
    assert_eq!(DietaryOption::ALL.len(), 20);
    for option in DietaryOption::ALL {
        assert_eq!(option.value().parse::<DietaryOption>(), Ok(option));
        assert_eq!(option.value().to_lowercase().parse::<DietaryOption>(), Ok(option));
    }
}

#[test]
fn test_selected_codes_match_catalog_tags() {
    let preferences = PreferencesDraft::new()
        .toggle_restriction(DietaryOption::Caffeine)
        .toggle_restriction(DietaryOption::Shellfish)
        .finish();
    let kept = PreferenceFilter::from_preferences(&preferences).apply(&sample_catalog());
    let names: Vec<&str> = kept.iter().map(|f| f.food_name.as_str()).collect();
    assert!(!names.contains(&"COFFEE"));
    assert!(!names.contains(&"TEA"));
    assert!(!names.contains(&"LOBSTER"));
    // "shellfish" contains "fish", so plain fish goes too
    assert!(!names.contains(&"SALMON"));
    assert!(names.contains(&"STEAK"));
    assert!(names.contains(&"BAGEL"));
}

// ============================================================================
// Round trip into the filter
// ============================================================================

#[test]
fn test_finished_preferences_drive_filter() {
    let preferences = PreferencesDraft::new()
        .select_budget(BudgetOption::Other)
        .custom_budget("12")
        .toggle_restriction(DietaryOption::Eggs)
        .custom_dietary("vegan")
        .finish();

    let filter = PreferenceFilter::from_preferences(&preferences);
    assert_eq!(*filter.budget(), BudgetBucket::AtMost(12.0));
    assert!(filter.restrictions().contains("eggs"));
    assert!(filter.restrictions().contains("honey"));

    let user = User::new("sam", &preferences.cost_preference, &preferences.dietary_restrictions);
    assert_eq!(user.preferences(), preferences);
}

#[test]
fn test_preferences_json_shape() {
    let preferences = UserPreferences::new("budget", "vegan, nut");
    let json = serde_json::to_value(&preferences).unwrap();
    assert_eq!(json["costPreference"], "budget");
    assert_eq!(json["dietaryRestrictions"], "vegan, nut");
}
