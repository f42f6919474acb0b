// ABOUTME: Fetch command for food-seer-cli
// ABOUTME: Pulls the current user and food catalog from the service, then recommends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use food_seer::errors::AppResult;
use tracing::info;

use super::recommend::render;
use crate::helpers::session::connect;
use crate::{OutputArgs, ServiceArgs};

/// Recommend from a fresh snapshot of the live service
pub async fn run(service: &ServiceArgs, output: OutputArgs) -> AppResult<()> {
    let client = connect(service).await?;
    let user = client.current_user().await?;
    let foods = client.foods().await?;
    info!(username = %user.username, foods = foods.len(), "recommending from live catalog");
    render(&foods, &user, output)
}
