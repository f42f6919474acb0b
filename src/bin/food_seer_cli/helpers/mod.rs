// ABOUTME: Helper modules for food-seer-cli
// ABOUTME: Output rendering and REST session setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

pub mod output;
pub mod session;
