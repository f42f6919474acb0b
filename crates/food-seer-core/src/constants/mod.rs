// ABOUTME: Application constants for the FoodSeer service boundary
// ABOUTME: REST endpoint paths, environment variable names, and default values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

/// Service names used in structured logging
pub mod service_names {
    /// Name reported by the command-line tool
    pub const FOOD_SEER_CLI: &str = "food-seer-cli";
}

/// REST endpoint paths of the FoodSeer service
pub mod api_paths {
    /// Login endpoint returning a bearer token
    pub const LOGIN: &str = "/auth/login";
    /// Currently authenticated user
    pub const CURRENT_USER: &str = "/api/users/me";
    /// Preference update for the current user
    pub const CURRENT_USER_PREFERENCES: &str = "/api/users/me/preferences";
    /// Full food catalog
    pub const FOODS: &str = "/api/foods";
}

/// Environment variable names
pub mod env_config {
    /// Base URL of the FoodSeer REST service
    pub const API_URL: &str = "FOOD_SEER_API_URL";
    /// Bearer token for the REST service
    pub const API_TOKEN: &str = "FOOD_SEER_TOKEN";
    /// Total request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "FOOD_SEER_HTTP_TIMEOUT_SECS";
    /// Connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "FOOD_SEER_HTTP_CONNECT_TIMEOUT_SECS";
    /// Exclusive upper price bound of the budget bucket
    pub const BUDGET_CEILING: &str = "FOOD_SEER_BUDGET_CEILING";
    /// Exclusive lower price bound of the premium bucket
    pub const PREMIUM_FLOOR: &str = "FOOD_SEER_PREMIUM_FLOOR";
}

/// Default configuration values
pub mod defaults {
    /// Base URL the FoodSeer backend listens on in development
    pub const API_URL: &str = "http://localhost:8080";
    /// Total request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Prices strictly below this are "budget"
    pub const BUDGET_CEILING: f64 = 10.0;
    /// Prices strictly above this are "premium"
    pub const PREMIUM_FLOOR: f64 = 20.0;
}
