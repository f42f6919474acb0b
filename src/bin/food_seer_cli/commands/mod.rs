// ABOUTME: Command modules for food-seer-cli
// ABOUTME: Recommend, fetch, preferences and catalog subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

pub mod catalog;
pub mod fetch;
pub mod preferences;
pub mod recommend;
