//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Everything a client sees comes from the `Display` strings below; raw
//! backend errors and token internals stay in server-side logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::token::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username/password did not match. The message never says which
    /// half was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Identity backend unreachable or timed out. Distinct from bad
    /// credentials so operators can tell outages apart.
    #[error("Authentication service temporarily unavailable")]
    ServiceUnavailable,

    /// Missing username or password on submission
    #[error("Username and password are required")]
    MalformedRequest,

    /// Expired, unsigned, or malformed session token
    #[error("Session token is invalid or expired")]
    TokenInvalid,

    /// Structurally valid token carrying a role outside the closed set.
    /// Denied exactly like `TokenInvalid`; kept separate for logging.
    #[error("Session token is invalid or expired")]
    UnrecognizedRole,

    /// Internal error. Detail is logged server-side, never surfaced.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::MalformedRequest => StatusCode::BAD_REQUEST,
            AuthError::TokenInvalid | AuthError::UnrecognizedRole => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::TokenInvalid
            | AuthError::UnrecognizedRole => ErrorKind::Unauthorized,
            AuthError::ServiceUnavailable => ErrorKind::ServiceUnavailable,
            AuthError::MalformedRequest => ErrorKind::BadRequest,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::ServiceUnavailable => {
                tracing::error!("Identity backend unavailable");
            }
            AuthError::UnrecognizedRole => {
                tracing::warn!("Session token with unrecognized role rejected");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::UnrecognizedRole { .. } => AuthError::UnrecognizedRole,
            _ => AuthError::TokenInvalid,
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
