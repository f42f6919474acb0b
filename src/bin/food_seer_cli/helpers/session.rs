// ABOUTME: REST session setup for food-seer-cli
// ABOUTME: Merges flags over environment configuration and logs in when asked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use food_seer::client::CatalogClient;
use food_seer::config::ClientConfig;
use food_seer::errors::{AppError, AppResult};
use tracing::info;

use crate::ServiceArgs;

/// Build an authenticated client from flags and environment
pub async fn connect(service: &ServiceArgs) -> AppResult<CatalogClient> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &service.base_url {
        config = config.with_base_url(base_url.as_str());
        config.validate()?;
    }
    if let Some(token) = &service.token {
        config = config.with_token(token.as_str());
    }

    let mut client = CatalogClient::new(&config)?;
    if let (Some(username), Some(password)) = (&service.username, &service.password) {
        info!(base_url = client.base_url(), "logging in");
        client.login(username, password).await?;
    }

    if client.token().is_none() {
        return Err(AppError::auth_required());
    }
    Ok(client)
}
