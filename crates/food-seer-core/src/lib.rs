// ABOUTME: Core types and constants for the FoodSeer preference engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

#![deny(unsafe_code)]

//! # FoodSeer Core
//!
//! Foundation crate providing shared types and constants for the FoodSeer
//! ordering service. This crate is designed to change infrequently, so the
//! recommendation engine and the client layer build against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: REST paths, environment variable names and defaults
//! - **models**: `User`, `Food` and `UserPreferences` as exchanged with the REST service

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (User, Food, preferences)
pub mod models;
