//! User Entity
//!
//! Normalized identity record built from a successful credential
//! verification. Immutable for the lifetime of a session; a fresh
//! instance is built on every login.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Opaque stable identifier from the identity backend
    pub user_id: UserId,
    /// Unique handle, case-sensitive. Carried exactly as the backend
    /// stores it; the auth core applies no normalization.
    pub username: String,
    /// Optional profile field
    pub display_name: Option<String>,
    /// Optional profile field
    pub email: Option<String>,
    /// Role admitted by the authorization gate
    pub role: UserRole,
    /// Capability strings (e.g. `trading.execute`). Informational: the
    /// gate does not enforce them, downstream consumers may.
    pub permissions: Vec<String>,
    /// Last successful login time
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Create a user with the required identity triple; profile fields
    /// start empty.
    pub fn new(user_id: UserId, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            username: username.into(),
            display_name: None,
            email: None,
            role,
            permissions: Vec::new(),
            last_login_at: Utc::now(),
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        self.last_login_at = Utc::now();
    }

    /// Check a capability string. Informational only.
    pub fn has_permission(&self, capability: &str) -> bool {
        self.permissions.iter().any(|p| p == capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(UserId::new("usr-1"), "Alice", UserRole::Trader);
        assert_eq!(user.username, "Alice");
        assert_eq!(user.role, UserRole::Trader);
        assert!(user.display_name.is_none());
        assert!(user.permissions.is_empty());
    }

    #[test]
    fn test_has_permission() {
        let mut user = User::new(UserId::new("usr-1"), "alice", UserRole::Trader);
        user.permissions = vec!["trading.execute".to_string()];

        assert!(user.has_permission("trading.execute"));
        assert!(!user.has_permission("trading.admin"));
    }

    #[test]
    fn test_record_login_advances() {
        let mut user = User::new(UserId::new("usr-1"), "alice", UserRole::Viewer);
        let before = user.last_login_at;
        user.record_login();
        assert!(user.last_login_at >= before);
    }
}
