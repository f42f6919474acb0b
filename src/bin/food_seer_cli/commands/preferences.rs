// ABOUTME: Preferences command for food-seer-cli
// ABOUTME: Composes wizard answers into preferences and saves them in one call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use food_seer::errors::{AppError, AppResult};
use food_seer::intelligence::{BudgetOption, DietaryOption, PreferencesDraft};

use crate::helpers::output::print_preferences;
use crate::helpers::session::connect;
use crate::ServiceArgs;

/// Replay command-line answers through the wizard draft
pub fn compose(
    budget: BudgetOption,
    custom_budget: Option<String>,
    restrictions: &[DietaryOption],
    custom_dietary: Option<String>,
) -> PreferencesDraft {
    let mut draft = PreferencesDraft::new().select_budget(budget);
    if let Some(text) = custom_budget {
        draft = draft.custom_budget(text);
    }
    for option in restrictions {
        // Repeated flags select once; toggling again would deselect
        if !draft.restrictions().contains(option) {
            draft = draft.toggle_restriction(*option);
        }
    }
    if let Some(text) = custom_dietary {
        draft = draft.custom_dietary(text);
    }
    draft
}

/// Print or persist the composed preferences
pub async fn run(
    draft: &PreferencesDraft,
    dry_run: bool,
    json: bool,
    service: &ServiceArgs,
) -> AppResult<()> {
    if !draft.can_advance_from_budget() {
        return Err(AppError::invalid_input("a budget answer is required"));
    }
    let preferences = draft.finish();

    if dry_run {
        return print_preferences(&preferences, json);
    }

    let client = connect(service).await?;
    let user = client.update_preferences(&preferences).await?;
    if !json {
        println!("Saved preferences for {}", user.username);
    }
    print_preferences(&user.preferences(), json)
}
