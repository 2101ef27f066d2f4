// ABOUTME: User account model for token-authenticated access
// ABOUTME: Holds credentials, preferred unit and password reset state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WeightUnit;

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Login email, unique across users
    pub email: String,
    /// bcrypt password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Unit the user prefers for display
    pub preferred_weight_unit: WeightUnit,
    /// Outstanding password reset token, if any
    #[serde(skip_serializing)]
    pub reset_token: Option<String>,
    /// When the outstanding reset token stops being accepted
    #[serde(skip_serializing)]
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    /// Account creation time
    pub created_at: DateTime<Utc>,
    /// Last profile update
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    #[must_use]
    pub fn new(email: String, password_hash: String, preferred_weight_unit: WeightUnit) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            preferred_weight_unit,
            reset_token: None,
            reset_token_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `token` matches the outstanding reset token and is still valid at `now`
    #[must_use]
    pub fn reset_token_valid(&self, token: &str, now: DateTime<Utc>) -> bool {
        match (&self.reset_token, self.reset_token_expires_at) {
            (Some(stored), Some(expires_at)) => stored == token && expires_at > now,
            _ => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_reset_token_expiry() {
        let mut user = User::new("a@example.com".into(), "hash".into(), WeightUnit::Kg);
        let now = Utc::now();
        assert!(!user.reset_token_valid("abc", now));

        user.reset_token = Some("abc".into());
        user.reset_token_expires_at = Some(now + Duration::minutes(5));
        assert!(user.reset_token_valid("abc", now));
        assert!(!user.reset_token_valid("abd", now));
        assert!(!user.reset_token_valid("abc", now + Duration::minutes(6)));
    }

    #[test]
    fn test_credentials_are_not_serialized() {
        let user = User::new("a@example.com".into(), "secret-hash".into(), WeightUnit::Lbs);
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("\"preferred_weight_unit\":\"lbs\""));
    }
}
