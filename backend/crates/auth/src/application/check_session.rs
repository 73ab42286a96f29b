//! Check Session Use Case
//!
//! Re-derives the session view presented to the rest of the application
//! from a presented token. The mapping is total and lossless for the
//! identity fields (id, username, role); claims the codec does not
//! recognize never reach this layer.

use std::sync::Arc;

use crate::domain::token::SessionTokenCodec;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::AuthResult;

/// The authenticated identity as the application sees it
#[derive(Debug, Clone)]
pub struct SessionView {
    pub user_id: UserId,
    pub username: String,
    pub role: UserRole,
    pub expires_at_ms: i64,
}

/// Check session use case
pub struct CheckSessionUseCase {
    codec: Arc<SessionTokenCodec>,
}

impl CheckSessionUseCase {
    pub fn new(codec: Arc<SessionTokenCodec>) -> Self {
        Self { codec }
    }

    /// Verify the token and map its claims into a session view.
    pub fn execute(&self, session_token: &str) -> AuthResult<SessionView> {
        let claims = self.codec.verify(session_token)?;

        Ok(SessionView {
            user_id: claims.user_id,
            username: claims.username,
            role: claims.role,
            expires_at_ms: claims.expires_at_ms,
        })
    }

    /// Just check if the session is valid (returns bool)
    pub fn is_valid(&self, session_token: &str) -> bool {
        self.execute(session_token).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::User;
    use std::time::Duration;

    fn codec() -> Arc<SessionTokenCodec> {
        Arc::new(SessionTokenCodec::new([9u8; 32], Duration::from_secs(3600)))
    }

    #[test]
    fn test_view_is_lossless_for_identity_fields() {
        let codec = codec();
        let mut user = User::new(UserId::new("usr-7"), "Bob", UserRole::Viewer);
        user.permissions = vec!["reports.read".to_string()];

        let token = codec.issue(&user);
        let view = CheckSessionUseCase::new(codec).execute(&token).unwrap();

        assert_eq!(view.user_id, user.user_id);
        assert_eq!(view.username, "Bob");
        assert_eq!(view.role, UserRole::Viewer);
    }

    #[test]
    fn test_is_valid() {
        let codec = codec();
        let user = User::new(UserId::new("usr-7"), "bob", UserRole::Trader);
        let token = codec.issue(&user);

        let use_case = CheckSessionUseCase::new(codec);
        assert!(use_case.is_valid(&token));
        assert!(!use_case.is_valid("not-a-token"));
    }
}
