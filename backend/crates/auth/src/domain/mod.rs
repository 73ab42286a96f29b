//! Domain Layer
//!
//! Contains entities, value objects, the credential-verifier port, and
//! the session token codec.

pub mod entity;
pub mod token;
pub mod value_object;
pub mod verifier;

// Re-exports
pub use entity::{session_claims::SessionClaims, user::User};
pub use token::{SessionTokenCodec, TokenError};
pub use value_object::{user_id::UserId, user_role::UserRole};
pub use verifier::CredentialVerifier;
