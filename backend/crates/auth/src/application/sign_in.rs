//! Sign In Use Case
//!
//! Exchanges credentials for a signed session token.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::token::SessionTokenCodec;
use crate::domain::verifier::CredentialVerifier;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    /// The authenticated user, with `last_login_at` freshly stamped
    pub user: User,
}

/// Sign in use case
///
/// The verifier is a constructor argument: production wires in the
/// HTTP-backed implementation once at startup, tests hand in a stub.
pub struct SignInUseCase<V>
where
    V: CredentialVerifier,
{
    verifier: Arc<V>,
    codec: Arc<SessionTokenCodec>,
}

impl<V> SignInUseCase<V>
where
    V: CredentialVerifier,
{
    pub fn new(verifier: Arc<V>, codec: Arc<SessionTokenCodec>) -> Self {
        Self { verifier, codec }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Reject before any backend call is made
        if input.username.is_empty() || input.password.is_empty() {
            return Err(AuthError::MalformedRequest);
        }

        // Both fields pass through untouched; comparison semantics are
        // backend-defined
        let user = self
            .verifier
            .verify(&input.username, &input.password)
            .await?;

        let mut user = user.ok_or(AuthError::InvalidCredentials)?;
        user.record_login();

        let session_token = self.codec.issue(&user);

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
    use std::time::Duration;

    /// Stub verifier: accepts exactly one credential pair.
    #[derive(Clone)]
    struct SingleUserVerifier {
        username: String,
        password: String,
        user: User,
    }

    impl CredentialVerifier for SingleUserVerifier {
        async fn verify(&self, username: &str, password: &str) -> AuthResult<Option<User>> {
            if username == self.username && password == self.password {
                Ok(Some(self.user.clone()))
            } else {
                Ok(None)
            }
        }
    }

    /// Stub verifier: the backend is down.
    #[derive(Clone)]
    struct DownVerifier;

    impl CredentialVerifier for DownVerifier {
        async fn verify(&self, _username: &str, _password: &str) -> AuthResult<Option<User>> {
            Err(AuthError::ServiceUnavailable)
        }
    }

    fn codec() -> Arc<SessionTokenCodec> {
        Arc::new(SessionTokenCodec::new([3u8; 32], Duration::from_secs(3600)))
    }

    fn stub() -> Arc<SingleUserVerifier> {
        Arc::new(SingleUserVerifier {
            username: "admin".to_string(),
            password: "correct".to_string(),
            user: User::new(UserId::new("usr-1"), "admin", UserRole::Admin),
        })
    }

    #[tokio::test]
    async fn test_valid_credentials_produce_verifiable_token() {
        let codec = codec();
        let use_case = SignInUseCase::new(stub(), codec.clone());

        let output = use_case
            .execute(SignInInput {
                username: "admin".to_string(),
                password: "correct".to_string(),
            })
            .await
            .unwrap();

        let claims = codec.verify(&output.session_token).unwrap();
        assert_eq!(claims.user_id, UserId::new("usr-1"));
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let use_case = SignInUseCase::new(stub(), codec());

        let err = use_case
            .execute(SignInInput {
                username: "admin".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_username_is_case_sensitive_per_stub_backend() {
        let use_case = SignInUseCase::new(stub(), codec());

        let err = use_case
            .execute(SignInInput {
                username: "Admin".to_string(),
                password: "correct".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_empty_fields_rejected_before_backend() {
        let use_case = SignInUseCase::new(stub(), codec());

        for (username, password) in [("", "correct"), ("admin", ""), ("", "")] {
            let err = use_case
                .execute(SignInInput {
                    username: username.to_string(),
                    password: password.to_string(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::MalformedRequest));
        }
    }

    #[tokio::test]
    async fn test_backend_outage_propagates_as_service_unavailable() {
        let use_case = SignInUseCase::new(Arc::new(DownVerifier), codec());

        let err = use_case
            .execute(SignInInput {
                username: "admin".to_string(),
                password: "correct".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::ServiceUnavailable));
    }
}
