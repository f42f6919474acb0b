// ABOUTME: REST client layer for the external FoodSeer service
// ABOUTME: Shared connection-pooled HTTP client plus the typed catalog client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

/// Typed client for login, current user, foods and preference updates
pub mod catalog;

/// Process-wide `reqwest` client built from `ClientConfig` timeouts
pub mod http_client;

pub use catalog::{CatalogClient, LoginResponse};
pub use http_client::{build_client, shared_client};
