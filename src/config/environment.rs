// ABOUTME: Environment configuration for the FoodSeer REST client
// ABOUTME: Base URL, bearer token and HTTP timeouts with typed parsing and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

//! Environment-based client configuration

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Settings for talking to the FoodSeer REST service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL without a trailing slash
    pub base_url: String,
    /// Bearer token, when already logged in
    pub token: Option<String>,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_URL.to_owned(),
            token: None,
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a timeout is not a positive integer
    /// or the base URL is not an http(s) URL
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            base_url: normalize_base_url(&env_var_or(env_config::API_URL, defaults::API_URL)),
            token: env::var(env_config::API_TOKEN)
                .ok()
                .map(|t| t.trim().to_owned())
                .filter(|t| !t.is_empty()),
            timeout_secs: parse_env(env_config::HTTP_TIMEOUT_SECS, defaults::HTTP_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                defaults::HTTP_CONNECT_TIMEOUT_SECS,
            )?,
        };

        config.validate()?;
        debug!(base_url = %config.base_url, has_token = config.token.is_some(), "client configuration loaded");
        Ok(config)
    }

    /// Replace the base URL, stripping trailing slashes
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    /// Replace the bearer token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Whole-request timeout for the HTTP client
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout for the HTTP client
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Validate the loaded values
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first invalid value
    pub fn validate(&self) -> AppResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::config_invalid(format!(
                "{} must be an http(s) URL, got '{}'",
                env_config::API_URL,
                self.base_url
            )));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(AppError::config_invalid("HTTP timeouts must be greater than zero"));
        }
        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {key} value '{value}'"))),
        Err(_) => Ok(default),
    }
}
