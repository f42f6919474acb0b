// ABOUTME: Async client for the FoodSeer REST service used by recommendations
// ABOUTME: Login, current user, food catalog and preference update with AppError mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

//! # Catalog Client
//!
//! Thin typed wrapper over the FoodSeer REST endpoints. Every call is a
//! single request: there are no retries and nothing is cached, so each view
//! works on a fresh `User` and `Food` snapshot.
//!
//! Status mapping: 401 and 403 become `AuthInvalid`, any other non-2xx
//! status becomes `ExternalServiceError`, transport failures become
//! `ExternalServiceUnavailable` and undecodable bodies become
//! `SerializationError`.

use super::http_client::shared_client;
use crate::config::ClientConfig;
use crate::constants::api_paths;
use crate::errors::{AppError, AppResult};
use crate::models::{Food, User, UserPreferences};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Service name used in error messages
const SERVICE_NAME: &str = "FoodSeer";

/// Longest response body excerpt carried in an error message
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent calls
    pub access_token: String,
    /// Token scheme, normally `Bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

/// Client for the FoodSeer REST service
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl CatalogClient {
    /// Create a client from configuration, sharing the process-wide HTTP client
    ///
    /// # Errors
    ///
    /// Returns an internal error if the shared HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = shared_client(config)?.clone();
        Ok(Self::with_http_client(http, config))
    }

    /// Create a client on top of a caller-supplied `reqwest::Client`
    #[must_use]
    pub fn with_http_client(http: Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token currently held, if logged in
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Exchange credentials for a bearer token and keep it for later calls
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` for rejected credentials, or a service,
    /// transport or decoding error
    pub async fn login(&mut self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let request = self
            .http
            .post(self.url(api_paths::LOGIN))
            .json(&LoginRequest { username, password });

        let login: LoginResponse = send_json(request, api_paths::LOGIN).await?;
        if login.access_token.trim().is_empty() {
            return Err(AppError::auth_invalid("login response carried no access token"));
        }

        info!(username, "logged in to FoodSeer");
        self.token = Some(login.access_token.clone());
        Ok(login)
    }

    /// Fetch the authenticated user with their stored preferences
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when no token is held, otherwise the mapped
    /// service error
    pub async fn current_user(&self) -> AppResult<User> {
        let request = self.http.get(self.url(api_paths::CURRENT_USER));
        let user: User = send_json(self.authorized(request)?, api_paths::CURRENT_USER).await?;
        debug!(username = %user.username, "fetched current user");
        Ok(user)
    }

    /// Fetch the full food catalog
    ///
    /// # Errors
    ///
    /// Returns the mapped service error
    pub async fn foods(&self) -> AppResult<Vec<Food>> {
        let mut request = self.http.get(self.url(api_paths::FOODS));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let foods: Vec<Food> = send_json(request, api_paths::FOODS).await?;
        info!(count = foods.len(), "fetched food catalog");
        Ok(foods)
    }

    /// Persist the user's preferences and return the updated user
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when no token is held, otherwise the mapped
    /// service error
    pub async fn update_preferences(&self, preferences: &UserPreferences) -> AppResult<User> {
        let request = self
            .http
            .put(self.url(api_paths::CURRENT_USER_PREFERENCES))
            .json(preferences);
        let user: User = send_json(
            self.authorized(request)?,
            api_paths::CURRENT_USER_PREFERENCES,
        )
        .await?;
        info!(
            cost_preference = user.cost_preference(),
            dietary_restrictions = user.dietary_restrictions(),
            "updated preferences"
        );
        Ok(user)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> AppResult<RequestBuilder> {
        self.token
            .as_deref()
            .map(|token| request.bearer_auth(token))
            .ok_or_else(AppError::auth_required)
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder, path: &str) -> AppResult<T> {
    let response = request.send().await.map_err(|e| {
        AppError::service_unavailable(format!("{SERVICE_NAME} request to {path} failed: {e}"))
            .with_source(e)
    })?;
    read_json(response, path).await
}

async fn read_json<T: DeserializeOwned>(response: Response, path: &str) -> AppResult<T> {
    let status = response.status();
    let body = response.text().await?;
    debug!(path, status = status.as_u16(), bytes = body.len(), "FoodSeer response");

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(AppError::auth_invalid(format!(
            "{path} rejected the credentials ({status})"
        )));
    }
    if !status.is_success() {
        let excerpt: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        return Err(AppError::external_service(
            SERVICE_NAME,
            format!("{path} returned {status}: {excerpt}"),
        ));
    }

    Ok(serde_json::from_str(&body)?)
}
