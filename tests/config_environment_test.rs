// ABOUTME: Tests for environment-driven configuration of the filter and the client
// ABOUTME: Validates defaults, overrides, parse failures and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use food_seer::config::{ClientConfig, PreferenceFilterConfig};
use food_seer::constants::env_config;
use food_seer::errors::ErrorCode;
use food_seer::intelligence::{recommend_foods, BudgetThresholds, ConfigError, PreferenceFilter};
use food_seer::models::{Food, User};
use serial_test::serial;
use std::env;

const ALL_VARS: &[&str] = &[
    env_config::API_URL,
    env_config::API_TOKEN,
    env_config::HTTP_TIMEOUT_SECS,
    env_config::HTTP_CONNECT_TIMEOUT_SECS,
    env_config::BUDGET_CEILING,
    env_config::PREMIUM_FLOOR,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Preference filter thresholds
// ============================================================================

#[test]
#[serial]
fn test_filter_defaults_without_env() {
    clear_env();
    let config = PreferenceFilterConfig::load().unwrap();
    assert_eq!(config.budget, BudgetThresholds::default());
    assert!((config.budget.budget_ceiling - 10.0).abs() < f64::EPSILON);
    assert!((config.budget.premium_floor - 20.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_filter_env_overrides() {
    clear_env();
    env::set_var(env_config::BUDGET_CEILING, " 8 ");
    env::set_var(env_config::PREMIUM_FLOOR, "25.5");

    let config = PreferenceFilterConfig::load().unwrap();
    assert!((config.budget.budget_ceiling - 8.0).abs() < f64::EPSILON);
    assert!((config.budget.premium_floor - 25.5).abs() < f64::EPSILON);
    clear_env();
}

#[test]
#[serial]
fn test_filter_unparseable_value() {
    clear_env();
    env::set_var(env_config::BUDGET_CEILING, "ten");
    let result = PreferenceFilterConfig::load();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
    clear_env();
}

#[test]
#[serial]
fn test_filter_ceiling_above_floor_rejected() {
    clear_env();
    env::set_var(env_config::BUDGET_CEILING, "30");
    env::set_var(env_config::PREMIUM_FLOOR, "20");
    let result = PreferenceFilterConfig::load();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
    clear_env();
}

#[test]
#[serial]
fn test_threshold_env_does_not_change_default_filter() {
    clear_env();
    env::set_var(env_config::BUDGET_CEILING, "15");
    let foods = [Food::new(1, "BURRITO", 12.0, 5, Vec::new())];
    let user = User::new("sam", "budget", "");

    assert!(recommend_foods(&foods, &user).is_empty());
    assert!(!PreferenceFilter::from_user(&user).admits(&foods[0]));

    let configured = PreferenceFilterConfig::load().unwrap();
    let filter = PreferenceFilter::from_user(&user).with_thresholds(configured.budget);
    assert!(filter.admits(&foods[0]));
    clear_env();
}

#[test]
fn test_filter_validation_rules() {
    let mut config = PreferenceFilterConfig::default();
    config.budget.budget_ceiling = 0.0;
    assert!(config.validate().is_err());

    config.budget.budget_ceiling = f64::NAN;
    assert!(config.validate().is_err());

    config.budget = BudgetThresholds {
        budget_ceiling: 15.0,
        premium_floor: 15.0,
    };
    assert!(config.validate().is_ok());
}

// ============================================================================
// Client configuration
// ============================================================================

#[test]
#[serial]
fn test_client_defaults_without_env() {
    clear_env();
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.token, None);
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.connect_timeout_secs, 10);
}

#[test]
#[serial]
fn test_client_env_overrides() {
    clear_env();
    env::set_var(env_config::API_URL, "https://foodseer.example.edu/");
    env::set_var(env_config::API_TOKEN, "  abc.def  ");
    env::set_var(env_config::HTTP_TIMEOUT_SECS, "5");
    env::set_var(env_config::HTTP_CONNECT_TIMEOUT_SECS, "2");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://foodseer.example.edu");
    assert_eq!(config.token.as_deref(), Some("abc.def"));
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.connect_timeout_secs, 2);
    clear_env();
}

#[test]
#[serial]
fn test_client_blank_token_ignored() {
    clear_env();
    env::set_var(env_config::API_TOKEN, "   ");
    assert_eq!(ClientConfig::from_env().unwrap().token, None);
    clear_env();
}

#[test]
#[serial]
fn test_client_invalid_timeout() {
    clear_env();
    env::set_var(env_config::HTTP_TIMEOUT_SECS, "soon");
    let error = ClientConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains(env_config::HTTP_TIMEOUT_SECS));

    env::set_var(env_config::HTTP_TIMEOUT_SECS, "0");
    let error = ClientConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_client_rejects_non_http_url() {
    clear_env();
    env::set_var(env_config::API_URL, "localhost:8080");
    let error = ClientConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_env();
}
