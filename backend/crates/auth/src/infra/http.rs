//! HTTP Identity Backend Client
//!
//! Production [`CredentialVerifier`] implementation. The identity
//! backend owns credential storage and comparison; this client only
//! carries the pair over and maps the response into a [`User`].
//!
//! The call is bounded by a single client-wide timeout and fails
//! closed: any transport problem is `ServiceUnavailable`, never an
//! implicit allow.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::entity::user::User;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::domain::verifier::CredentialVerifier;
use crate::error::{AuthError, AuthResult};

/// Default timeout for the verify call
pub const DEFAULT_VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP-backed credential verifier
#[derive(Clone)]
pub struct HttpCredentialVerifier {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Backend contract: `user` is present when the pair matched, null
/// otherwise.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponse {
    user: Option<UserRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    id: String,
    username: String,
    display_name: Option<String>,
    email: Option<String>,
    role: String,
    #[serde(default)]
    permissions: Vec<String>,
}

impl HttpCredentialVerifier {
    /// Create a verifier for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> AuthResult<Self> {
        Self::with_timeout(base_url, DEFAULT_VERIFY_TIMEOUT)
    }

    /// Create a verifier with an explicit timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> AuthResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Internal(format!("Failed to build HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    fn map_record(record: UserRecord) -> AuthResult<User> {
        // An out-of-enum role here is a backend contract violation, not
        // a bad credential; it must never become a token
        let role = UserRole::parse_code(&record.role).ok_or_else(|| {
            tracing::error!(code = %record.role, "Identity backend returned unknown role code");
            AuthError::Internal("Identity backend returned unknown role code".to_string())
        })?;

        let mut user = User::new(UserId::new(record.id), record.username, role);
        user.display_name = record.display_name;
        user.email = record.email;
        user.permissions = record.permissions;

        Ok(user)
    }
}

impl CredentialVerifier for HttpCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> AuthResult<Option<User>> {
        let url = format!("{}/verify", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&VerifyRequest { username, password })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Identity backend unreachable");
                AuthError::ServiceUnavailable
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Identity backend error response");
            return Err(AuthError::ServiceUnavailable);
        }

        let body: VerifyResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Identity backend returned unparseable body");
            AuthError::ServiceUnavailable
        })?;

        match body.user {
            Some(record) => Self::map_record(record).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(role: &str) -> UserRecord {
        UserRecord {
            id: "usr-9".to_string(),
            username: "carol".to_string(),
            display_name: Some("Carol".to_string()),
            email: None,
            role: role.to_string(),
            permissions: vec!["signals.read".to_string()],
        }
    }

    #[test]
    fn test_map_record_populates_user() {
        let user = HttpCredentialVerifier::map_record(record("TRADER")).unwrap();

        assert_eq!(user.user_id, UserId::new("usr-9"));
        assert_eq!(user.username, "carol");
        assert_eq!(user.display_name.as_deref(), Some("Carol"));
        assert_eq!(user.role, UserRole::Trader);
        assert!(user.has_permission("signals.read"));
    }

    #[test]
    fn test_map_record_rejects_unknown_role() {
        let err = HttpCredentialVerifier::map_record(record("SUPERUSER")).unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));

        let err = HttpCredentialVerifier::map_record(record("trader")).unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let verifier = HttpCredentialVerifier::new("http://identity.internal/").unwrap();
        assert_eq!(verifier.base_url, "http://identity.internal");
    }

    #[tokio::test]
    async fn test_unreachable_backend_fails_closed() {
        // Reserved TEST-NET address; nothing listens there
        let verifier = HttpCredentialVerifier::with_timeout(
            "http://192.0.2.1:9",
            Duration::from_millis(100),
        )
        .unwrap();

        let err = verifier.verify("admin", "correct").await.unwrap_err();
        assert!(matches!(err, AuthError::ServiceUnavailable));
    }
}
