// ABOUTME: Integration tests for the FoodSeer REST client against an in-process server
// ABOUTME: Validates login, user and catalog fetches, preference updates and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use food_seer::client::CatalogClient;
use food_seer::config::ClientConfig;
use food_seer::errors::ErrorCode;
use food_seer::intelligence::recommend_foods;
use food_seer::models::UserPreferences;
use serde_json::{json, Value};
use tokio::net::TcpListener;

const TOKEN: &str = "tok-123";

// ============================================================================
// Test server
// ============================================================================

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn user_json(cost: &str, diet: &str) -> Value {
    json!({
        "id": 7,
        "username": "sam",
        "email": "sam@ncsu.edu",
        "role": "ROLE_CUSTOMER",
        "costPreference": cost,
        "dietaryRestrictions": diet,
    })
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "sam" && body["password"] == "secret" {
        Json(json!({ "accessToken": TOKEN, "tokenType": "Bearer" })).into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

async fn current_user(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(user_json("budget", "vegan")).into_response()
}

async fn foods() -> Json<Value> {
    Json(json!([
        { "id": 1, "foodName": "COFFEE", "price": 3, "amount": 50, "allergies": ["CAFFEINE"] },
        { "id": 2, "foodName": "YOGURT", "price": 4, "amount": 35, "allergies": ["MILK", "DAIRY", "LACTOSE"] },
        { "id": 3, "foodName": "GARDEN SALAD", "price": 10, "amount": 15, "allergies": [] },
        { "id": 4, "foodName": "BANANA", "price": 1, "amount": 60 },
    ]))
}

async fn update_preferences(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }
    let cost = body["costPreference"].as_str().unwrap_or_default();
    let diet = body["dietaryRestrictions"].as_str().unwrap_or_default();
    Json(user_json(cost, diet)).into_response()
}

fn service_router() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/api/users/me", get(current_user))
        .route("/api/foods", get(foods))
        .route("/api/users/me/preferences", put(update_preferences))
}

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: &str) -> CatalogClient {
    let config = ClientConfig::default().with_base_url(base_url);
    CatalogClient::with_http_client(reqwest::Client::new(), &config)
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn test_login_stores_token() {
    let base_url = spawn(service_router()).await;
    let mut client = client_for(&base_url);
    assert!(client.token().is_none());

    let login = client.login("sam", "secret").await.unwrap();
    assert_eq!(login.access_token, TOKEN);
    assert_eq!(login.token_type, "Bearer");
    assert_eq!(client.token(), Some(TOKEN));
}

#[tokio::test]
async fn test_fetch_and_recommend() {
    let base_url = spawn(service_router()).await;
    let mut client = client_for(&base_url);
    client.login("sam", "secret").await.unwrap();

    let user = client.current_user().await.unwrap();
    assert_eq!(user.username, "sam");
    assert_eq!(user.id, Some(7));
    assert_eq!(user.cost_preference(), "budget");

    let foods = client.foods().await.unwrap();
    assert_eq!(foods.len(), 4);
    assert!(foods[3].allergies.is_empty());

    let kept = recommend_foods(&foods, &user);
    let names: Vec<&str> = kept.iter().map(|f| f.food_name.as_str()).collect();
    assert_eq!(names, vec!["COFFEE", "BANANA"]);
}

#[tokio::test]
async fn test_update_preferences_returns_updated_user() {
    let base_url = spawn(service_router()).await;
    let config = ClientConfig::default()
        .with_base_url(base_url.as_str())
        .with_token(TOKEN);
    let client = CatalogClient::with_http_client(reqwest::Client::new(), &config);

    let preferences = UserPreferences::new("under-20", "vegetarian, other, sesame");
    let user = client.update_preferences(&preferences).await.unwrap();
    assert_eq!(user.preferences(), preferences);
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn test_bad_credentials_are_auth_invalid() {
    let base_url = spawn(service_router()).await;
    let mut client = client_for(&base_url);
    let error = client.login("sam", "wrong").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_missing_token_is_auth_required() {
    let base_url = spawn(service_router()).await;
    let client = client_for(&base_url);
    let error = client.current_user().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
}

#[tokio::test]
async fn test_rejected_token_is_auth_invalid() {
    let base_url = spawn(service_router()).await;
    let config = ClientConfig::default()
        .with_base_url(base_url.as_str())
        .with_token("stale");
    let client = CatalogClient::with_http_client(reqwest::Client::new(), &config);

    let error = client
        .update_preferences(&UserPreferences::default())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_server_error_is_external_service_error() {
    let router = Router::new().route(
        "/api/foods",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
    );
    let base_url = spawn(router).await;
    let error = client_for(&base_url).foods().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("database down"));
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let router = Router::new().route("/api/foods", get(|| async { "not json" }));
    let base_url = spawn(router).await;
    let error = client_for(&base_url).foods().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_unreachable_service_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = client_for(&format!("http://{addr}"))
        .foods()
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}
