// ABOUTME: Loaders for catalog snapshots and users stored as JSON files
// ABOUTME: Accepts the same camelCase shapes the FoodSeer REST service returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{Food, User};
use serde::de::DeserializeOwned;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Load a JSON array of foods
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file, `StorageError` for other
/// read failures and `SerializationError` for malformed JSON
pub async fn load_foods(path: impl AsRef<Path>) -> AppResult<Vec<Food>> {
    let foods: Vec<Food> = load_json(path.as_ref()).await?;
    debug!(path = %path.as_ref().display(), count = foods.len(), "loaded catalog file");
    Ok(foods)
}

/// Load a single user object
///
/// # Errors
///
/// Same as [`load_foods`]
pub async fn load_user(path: impl AsRef<Path>) -> AppResult<User> {
    load_json(path.as_ref()).await
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        let code = if e.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        AppError::new(code, format!("{}: {e}", path.display())).with_source(e)
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("{} is not valid JSON for this shape: {e}", path.display()),
        )
        .with_source(e)
    })
}
