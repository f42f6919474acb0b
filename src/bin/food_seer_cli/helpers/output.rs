// ABOUTME: Output formatting helpers for food-seer-cli
// ABOUTME: Tables and JSON for recommendations, verdicts and preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use food_seer::errors::AppResult;
use food_seer::intelligence::{FoodVerdict, PreferenceFilter};
use food_seer::models::{Food, UserPreferences};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExplainedFood<'a> {
    id: i64,
    food_name: &'a str,
    price: f64,
    #[serde(flatten)]
    verdict: &'a FoodVerdict,
}

fn print_json(value: &impl Serialize) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_filter_header(filter: &PreferenceFilter) {
    let restrictions: Vec<&str> = filter.restrictions().iter().collect();
    println!("Budget: {}", filter.budget());
    if restrictions.is_empty() {
        println!("Restrictions: none");
    } else {
        println!("Restrictions: {}", restrictions.join(", "));
    }
    println!("{}", "=".repeat(72));
}

fn allergen_list(food: &Food) -> String {
    if food.allergies.is_empty() {
        "-".to_owned()
    } else {
        food.allergies.join(", ")
    }
}

/// Display the foods that survived filtering
pub fn print_recommendations(
    filter: &PreferenceFilter,
    foods: &[Food],
    json: bool,
) -> AppResult<()> {
    if json {
        return print_json(&foods);
    }

    print_filter_header(filter);
    if foods.is_empty() {
        println!("No foods match these preferences.");
        return Ok(());
    }
    println!("{:>4}  {:<22} {:>7} {:>6}  ALLERGENS", "ID", "NAME", "PRICE", "STOCK");
    for food in foods {
        println!(
            "{:>4}  {:<22} {:>7.2} {:>6}  {}",
            food.id,
            food.food_name,
            food.price,
            food.amount,
            allergen_list(food)
        );
    }
    println!("\n{} item(s) recommended", foods.len());
    Ok(())
}

/// Human-readable verdict
fn describe(verdict: &FoodVerdict) -> String {
    match verdict {
        FoodVerdict::Kept => "kept".to_owned(),
        FoodVerdict::OverBudget { bucket, price } => {
            format!("dropped: price {price:.2} outside {bucket}")
        }
        FoodVerdict::ContainsAllergen {
            allergen,
            restriction,
        } => format!("dropped: {allergen} matches '{restriction}'"),
    }
}

/// Display a verdict for every catalog item
pub fn print_verdicts(
    filter: &PreferenceFilter,
    explained: &[(&Food, FoodVerdict)],
    json: bool,
) -> AppResult<()> {
    if json {
        let rows: Vec<ExplainedFood<'_>> = explained
            .iter()
            .map(|(food, verdict)| ExplainedFood {
                id: food.id,
                food_name: &food.food_name,
                price: food.price,
                verdict,
            })
            .collect();
        return print_json(&rows);
    }

    print_filter_header(filter);
    for (food, verdict) in explained {
        println!("{:>4}  {:<22} {}", food.id, food.food_name, describe(verdict));
    }
    let kept = explained.iter().filter(|(_, v)| v.is_kept()).count();
    println!("\n{kept} of {} item(s) kept", explained.len());
    Ok(())
}

/// Display composed or saved preferences
pub fn print_preferences(preferences: &UserPreferences, json: bool) -> AppResult<()> {
    if json {
        return print_json(preferences);
    }
    let show = |value: &str| {
        if value.is_empty() {
            "(none)".to_owned()
        } else {
            value.to_owned()
        }
    };
    println!("Cost preference:      {}", show(&preferences.cost_preference));
    println!(
        "Dietary restrictions: {}",
        show(&preferences.dietary_restrictions)
    );
    Ok(())
}
