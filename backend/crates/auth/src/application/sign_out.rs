//! Sign Out Use Case
//!
//! Sign-out is client-side: the handler expires the session cookie and
//! the token simply stops being presented. There is no server-side
//! revocation list; an already-issued token stays valid until expiry.

use std::sync::Arc;

use crate::domain::token::SessionTokenCodec;

/// Sign out use case
pub struct SignOutUseCase {
    codec: Arc<SessionTokenCodec>,
}

impl SignOutUseCase {
    pub fn new(codec: Arc<SessionTokenCodec>) -> Self {
        Self { codec }
    }

    /// Record the sign-out. Never fails: a missing or invalid token
    /// still results in the cookie being cleared by the handler.
    pub fn execute(&self, session_token: Option<&str>) {
        let Some(token) = session_token else {
            tracing::debug!("Sign-out without session cookie");
            return;
        };

        match self.codec.verify(token) {
            Ok(claims) => {
                tracing::info!(user_id = %claims.user_id, "User signed out");
            }
            Err(e) => {
                tracing::debug!(error = %e, "Sign-out with unverifiable token");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
    use std::time::Duration;

    #[test]
    fn test_sign_out_accepts_any_input() {
        let codec = Arc::new(SessionTokenCodec::new([5u8; 32], Duration::from_secs(60)));
        let use_case = SignOutUseCase::new(codec.clone());

        let token = codec.issue(&User::new(UserId::new("usr-1"), "alice", UserRole::Viewer));

        // None of these panic or fail; the cookie clear happens regardless
        use_case.execute(Some(&token));
        use_case.execute(Some("garbage"));
        use_case.execute(None);
    }
}
