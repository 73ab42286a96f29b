//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, the credential-verifier port,
//!   and the session token codec
//! - `application/` - Use cases and configuration
//! - `infra/` - Identity backend client
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! ## Features
//! - Credential sign-in against an external identity backend
//! - Signed, self-contained session tokens carried in an HttpOnly cookie
//! - Role-gated request authorization (Admin, Trader, Viewer)
//!
//! ## Security Model
//! - Tokens are HMAC-SHA256 signed with an environment-provided secret
//! - Role codes are matched exactly; anything outside the closed set denies
//! - Credential failures surface a single generic message, never the
//!   failing field
//! - The identity backend call is bounded by a timeout and fails closed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::token::SessionTokenCodec;
pub use error::{AuthError, AuthResult};
pub use infra::http::HttpCredentialVerifier;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
