// ABOUTME: Authenticated user model carrying stored budget and dietary preferences
// ABOUTME: Preference fields are free text and may be absent in the service JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer

use super::UserPreferences;
use serde::{Deserialize, Serialize};

/// A FoodSeer account as returned by `GET /api/users/me`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Database identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login name
    pub username: String,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role name such as `ROLE_CUSTOMER` or `ROLE_ADMIN`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Free-form budget text ("budget", "moderate", "15", ...)
    #[serde(default)]
    pub cost_preference: Option<String>,
    /// Comma-separated dietary restriction text ("vegan, nut")
    #[serde(default)]
    pub dietary_restrictions: Option<String>,
}

impl User {
    /// Create a user with the given stored preferences
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        cost_preference: impl Into<String>,
        dietary_restrictions: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            cost_preference: Some(cost_preference.into()),
            dietary_restrictions: Some(dietary_restrictions.into()),
            ..Self::default()
        }
    }

    /// Stored cost preference, empty when absent
    #[must_use]
    pub fn cost_preference(&self) -> &str {
        self.cost_preference.as_deref().unwrap_or_default()
    }

    /// Stored dietary restrictions, empty when absent
    #[must_use]
    pub fn dietary_restrictions(&self) -> &str {
        self.dietary_restrictions.as_deref().unwrap_or_default()
    }

    /// Snapshot of the stored preferences as an immutable value
    #[must_use]
    pub fn preferences(&self) -> UserPreferences {
        UserPreferences::new(self.cost_preference(), self.dietary_restrictions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_preferences_read_as_empty() {
        let user: User = serde_json::from_str(
            r#"{"id":7,"username":"sam","email":"sam@ncsu.edu","role":"ROLE_CUSTOMER","costPreference":null}"#,
        )
        .unwrap();
        assert_eq!(user.cost_preference(), "");
        assert_eq!(user.dietary_restrictions(), "");
        assert_eq!(user.role.as_deref(), Some("ROLE_CUSTOMER"));
    }

    #[test]
    fn test_preferences_snapshot() {
        let user = User::new("sam", "moderate", "vegan, nut");
        let prefs = user.preferences();
        assert_eq!(prefs.cost_preference, "moderate");
        assert_eq!(prefs.dietary_restrictions, "vegan, nut");
    }
}
