// ABOUTME: Seed food catalog matching what the FoodSeer backend loads into an empty database
// ABOUTME: Breakfast, lunch, premium, plant-based and dessert items with uppercase allergen tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use crate::models::Food;

/// `(name, amount, price, allergens)` in seeding order
const SEED_FOODS: &[(&str, u32, f64, &[&str])] = &[
    // Breakfast and snacks
    ("COFFEE", 50, 3.0, &["CAFFEINE"]),
    ("TEA", 40, 2.0, &["CAFFEINE"]),
    ("BAGEL", 30, 4.0, &["GLUTEN", "WHEAT", "SESAME"]),
    ("BANANA", 60, 1.0, &[]),
    ("APPLE", 50, 2.0, &[]),
    ("ORANGE JUICE", 25, 5.0, &[]),
    ("YOGURT", 35, 4.0, &["MILK", "DAIRY", "LACTOSE"]),
    (
        "GRANOLA BAR",
        45,
        3.0,
        &["TREE-NUTS", "PEANUTS", "GLUTEN", "WHEAT", "SOY"],
    ),
    // Lunch
    (
        "TURKEY SANDWICH",
        20,
        12.0,
        &["GLUTEN", "WHEAT", "MEAT", "POULTRY", "DAIRY", "EGGS", "MUSTARD"],
    ),
    ("GARDEN SALAD", 15, 10.0, &[]),
    (
        "CAESAR SALAD",
        15,
        11.0,
        &["MILK", "DAIRY", "EGGS", "FISH", "GLUTEN", "WHEAT"],
    ),
    ("PASTA", 18, 14.0, &["GLUTEN", "WHEAT", "EGGS"]),
    (
        "PIZZA SLICE",
        25,
        8.0,
        &["GLUTEN", "WHEAT", "MILK", "DAIRY", "LACTOSE"],
    ),
    (
        "BURRITO",
        22,
        11.0,
        &["GLUTEN", "WHEAT", "MILK", "DAIRY", "LACTOSE", "MEAT", "BEEF", "SOY"],
    ),
    ("VEGETABLE SOUP", 20, 9.0, &["SOY"]),
    (
        "CHICKEN NOODLE SOUP",
        18,
        10.0,
        &["GLUTEN", "WHEAT", "MEAT", "POULTRY", "EGGS"],
    ),
    ("SUSHI ROLL", 15, 13.0, &["FISH", "SOY", "SESAME", "EGGS"]),
    (
        "CHICKEN WRAP",
        18,
        10.0,
        &["GLUTEN", "WHEAT", "MEAT", "POULTRY", "MILK", "DAIRY"],
    ),
    // Premium
    ("STEAK", 10, 28.0, &["MEAT", "BEEF"]),
    ("SALMON", 12, 24.0, &["FISH"]),
    ("LOBSTER", 8, 35.0, &["SHELLFISH"]),
    (
        "SUSHI PLATTER",
        10,
        32.0,
        &["FISH", "SHELLFISH", "SOY", "SESAME", "EGGS"],
    ),
    ("RIBEYE", 8, 30.0, &["MEAT", "BEEF"]),
    // Plant-based
    ("VEGGIE BURGER", 20, 11.0, &["GLUTEN", "WHEAT", "SOY", "SESAME"]),
    ("TOFU BOWL", 18, 12.0, &["SOY", "SESAME"]),
    ("QUINOA SALAD", 15, 13.0, &[]),
    ("HUMMUS WRAP", 20, 9.0, &["GLUTEN", "WHEAT", "SESAME"]),
    // Desserts
    (
        "CHOCOLATE CAKE",
        12,
        7.0,
        &["GLUTEN", "WHEAT", "MILK", "DAIRY", "LACTOSE", "EGGS", "SOY"],
    ),
    ("ICE CREAM", 25, 6.0, &["MILK", "DAIRY", "LACTOSE", "EGGS"]),
    (
        "COOKIES",
        30,
        5.0,
        &["GLUTEN", "WHEAT", "MILK", "DAIRY", "EGGS", "SOY", "TREE-NUTS", "PEANUTS"],
    ),
    ("FRUIT SALAD", 20, 8.0, &[]),
];

/// The seed catalog with sequential ids starting at 1
#[must_use]
pub fn sample_catalog() -> Vec<Food> {
    SEED_FOODS
        .iter()
        .zip(1_i64..)
        .map(|(&(name, amount, price, allergens), id)| {
            Food::new(
                id,
                name,
                price,
                amount,
                allergens.iter().map(|a| (*a).to_owned()).collect(),
            )
        })
        .collect()
}
