// ABOUTME: Immutable budget and dietary preference value persisted in one call
// ABOUTME: Matches the body of PUT /api/users/me/preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use serde::{Deserialize, Serialize};

/// Stored preference pair for a user
///
/// Values are replaced wholesale: every `with_*` method returns a new value
/// and the original is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Free-form budget text
    #[serde(default)]
    pub cost_preference: String,
    /// Comma-separated dietary restriction text
    #[serde(default)]
    pub dietary_restrictions: String,
}

impl UserPreferences {
    /// Create a preference value
    #[must_use]
    pub fn new(cost_preference: impl Into<String>, dietary_restrictions: impl Into<String>) -> Self {
        Self {
            cost_preference: cost_preference.into(),
            dietary_restrictions: dietary_restrictions.into(),
        }
    }

    /// Copy with a different cost preference
    #[must_use]
    pub fn with_cost_preference(&self, cost_preference: impl Into<String>) -> Self {
        Self {
            cost_preference: cost_preference.into(),
            dietary_restrictions: self.dietary_restrictions.clone(),
        }
    }

    /// Copy with different dietary restrictions
    #[must_use]
    pub fn with_dietary_restrictions(&self, dietary_restrictions: impl Into<String>) -> Self {
        Self {
            cost_preference: self.cost_preference.clone(),
            dietary_restrictions: dietary_restrictions.into(),
        }
    }

    /// Neither preference is set
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.cost_preference.trim().is_empty() && self.dietary_restrictions.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_methods_leave_original_untouched() {
        let base = UserPreferences::new("budget", "vegan");
        let changed = base.with_cost_preference("premium");
        assert_eq!(base.cost_preference, "budget");
        assert_eq!(changed.cost_preference, "premium");
        assert_eq!(changed.dietary_restrictions, "vegan");
    }

    #[test]
    fn test_serializes_request_body_shape() {
        let json = serde_json::to_value(UserPreferences::new("15", "nut")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"costPreference": "15", "dietaryRestrictions": "nut"})
        );
    }

    #[test]
    fn test_is_unset() {
        assert!(UserPreferences::default().is_unset());
        assert!(UserPreferences::new(" ", "").is_unset());
        assert!(!UserPreferences::new("", "vegan").is_unset());
    }
}
