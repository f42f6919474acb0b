// ABOUTME: Budget bucket classification of free-form cost preference text
// ABOUTME: Keyword buckets, numeric price ceilings, and the no-limit fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use crate::config::BudgetThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords selecting the budget bucket
const BUDGET_KEYWORDS: &[&str] = &["budget", "cheap", "low"];
/// Keywords selecting the moderate bucket
const MODERATE_KEYWORDS: &[&str] = &["moderate", "medium", "mid"];
/// Keywords selecting the premium bucket
const PREMIUM_KEYWORDS: &[&str] = &["high", "premium", "expensive"];

/// Coarse price range derived from a user's cost preference
///
/// Classification is a case-insensitive substring search over the keyword
/// lists in bucket order, so "low-moderate" is [`BudgetBucket::Budget`].
/// Text matching no keyword is read as a numeric ceiling; anything else
/// applies no price restriction at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "bucket", content = "ceiling", rename_all = "snake_case")]
pub enum BudgetBucket {
    /// `price < budget_ceiling`
    Budget,
    /// `budget_ceiling <= price <= premium_floor`
    Moderate,
    /// `price > premium_floor`
    Premium,
    /// `price <= ceiling`, with the ceiling rounded up to a whole unit
    ///
    /// Fractional prices up to the next whole unit pass too: "17.5" admits
    /// 17.9 and 18 but not 18.01.
    AtMost(f64),
    /// Every price passes
    #[default]
    NoLimit,
}

impl BudgetBucket {
    /// Classify free-form cost preference text
    #[must_use]
    pub fn from_preference(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        if contains_any(BUDGET_KEYWORDS) {
            Self::Budget
        } else if contains_any(MODERATE_KEYWORDS) {
            Self::Moderate
        } else if contains_any(PREMIUM_KEYWORDS) {
            Self::Premium
        } else {
            Self::parse_ceiling(&lowered)
        }
    }

    fn parse_ceiling(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(ceiling) if ceiling.is_finite() => Self::AtMost(ceiling),
            _ => Self::NoLimit,
        }
    }

    /// Whether `price` falls in this bucket under the default thresholds
    #[must_use]
    pub fn admits(&self, price: f64) -> bool {
        self.admits_within(price, &BudgetThresholds::default())
    }

    /// Whether `price` falls in this bucket under the given thresholds
    #[must_use]
    pub fn admits_within(&self, price: f64, thresholds: &BudgetThresholds) -> bool {
        match *self {
            Self::Budget => price < thresholds.budget_ceiling,
            Self::Moderate => {
                thresholds.budget_ceiling <= price && price <= thresholds.premium_floor
            }
            Self::Premium => price > thresholds.premium_floor,
            Self::AtMost(ceiling) => price <= ceiling.ceil(),
            Self::NoLimit => true,
        }
    }

    /// Whether this bucket lets every price through
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        matches!(self, Self::NoLimit)
    }
}

impl fmt::Display for BudgetBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget => f.write_str("budget"),
            Self::Moderate => f.write_str("moderate"),
            Self::Premium => f.write_str("premium"),
            Self::AtMost(ceiling) => write!(f, "at most {ceiling}"),
            Self::NoLimit => f.write_str("no limit"),
        }
    }
}
