// ABOUTME: Recommend command for food-seer-cli
// ABOUTME: Filters a local catalog file or the sample catalog by user preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use food_seer::catalog::{load_foods, load_user, sample_catalog};
use food_seer::config::PreferenceFilterConfig;
use food_seer::errors::AppResult;
use food_seer::intelligence::PreferenceFilter;
use food_seer::models::{Food, User};
use std::path::PathBuf;
use tracing::info;

use crate::helpers::output::{print_recommendations, print_verdicts};
use crate::OutputArgs;

/// Recommend from local inputs; preference flags override the user file
pub async fn run(
    catalog: Option<PathBuf>,
    user: Option<PathBuf>,
    cost: Option<String>,
    diet: Option<String>,
    output: OutputArgs,
) -> AppResult<()> {
    let foods = match catalog {
        Some(path) => load_foods(&path).await?,
        None => {
            info!("no catalog file given, using the sample catalog");
            sample_catalog()
        }
    };

    let mut user = match user {
        Some(path) => load_user(&path).await?,
        None => User::default(),
    };
    if cost.is_some() {
        user.cost_preference = cost;
    }
    if diet.is_some() {
        user.dietary_restrictions = diet;
    }

    render(&foods, &user, output)
}

/// Filter `foods` for `user` under the environment thresholds and print the result
pub fn render(foods: &[Food], user: &User, output: OutputArgs) -> AppResult<()> {
    let filter =
        PreferenceFilter::from_user(user).with_thresholds(PreferenceFilterConfig::global().budget);
    if output.explain {
        print_verdicts(&filter, &filter.explain(foods), output.json)
    } else {
        print_recommendations(&filter, &filter.apply(foods), output.json)
    }
}
