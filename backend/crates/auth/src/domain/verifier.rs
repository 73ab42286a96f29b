//! Credential Verifier Port
//!
//! Boundary to the external identity source. Implementation lives in the
//! infrastructure layer; tests inject a stub through the use-case
//! constructor, so no global state or late binding is involved.

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// Credential verifier trait
#[trait_variant::make(CredentialVerifier: Send)]
pub trait LocalCredentialVerifier {
    /// Verify a username/password pair against the identity source.
    ///
    /// `Ok(None)` means the pair did not match; which half was wrong is
    /// never distinguished. Errors are reserved for transport failures
    /// (backend unreachable, timeout) and must surface as
    /// `AuthError::ServiceUnavailable`.
    ///
    /// Comparison semantics (case sensitivity included) belong to the
    /// backend; implementations pass both fields through untouched.
    async fn verify(&self, username: &str, password: &str) -> AuthResult<Option<User>>;
}
