//! Session Claims Entity
//!
//! The decoded contents of a signed session token. This is the only
//! session state the server sees between requests; nothing is stored
//! server-side.

use chrono::Utc;

use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

/// Claims recovered from a verified session token
#[derive(Debug, Clone, PartialEq)]
pub struct SessionClaims {
    /// Subject: the user's opaque identifier
    pub user_id: UserId,
    /// Handle at issue time
    pub username: String,
    /// Role at issue time. A role change takes effect on next login.
    pub role: UserRole,
    /// Issue time (Unix timestamp ms)
    pub issued_at_ms: i64,
    /// Expiry (Unix timestamp ms)
    pub expires_at_ms: i64,
}

impl SessionClaims {
    /// Check expiry against an explicit clock.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }

    /// Check expiry against the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}
