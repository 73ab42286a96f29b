//! Authorization Gate Middleware
//!
//! Per-request interceptor for every route the server exposes. Order of
//! decisions:
//!
//! 1. Exempt-path match (configured patterns) - bypasses everything below
//! 2. Session cookie present - otherwise deny
//! 3. Token decodes: signature, expiry, and exact role membership in the
//!    closed set - otherwise deny
//!
//! The role check is the exact-match parse inside the codec: `"ADMIN"`,
//! `"TRADER"` and `"VIEWER"` are admitted as a flat allow-list, anything
//! else (including `"admin"` or an empty string) denies. Denial is
//! always an explicit 401, never a silent pass-through.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::token::SessionTokenCodec;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

/// Middleware state
#[derive(Clone)]
pub struct GateState {
    pub codec: Arc<SessionTokenCodec>,
    pub config: Arc<AuthConfig>,
}

/// Identity of the authenticated caller, inserted into request
/// extensions on allow.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub role: UserRole,
}

/// Middleware that requires a valid session on every non-exempt route
pub async fn require_session(
    State(state): State<GateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let path = req.uri().path().to_owned();

    if state.config.is_exempt(&path) {
        return Ok(next.run(req).await);
    }

    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let Some(token) = token else {
        tracing::debug!(path = %path, "No session cookie");
        return Err(deny());
    };

    let claims = match state.codec.verify(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Rejected session token");
            return Err(deny());
        }
    };

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

fn deny() -> Response {
    (StatusCode::UNAUTHORIZED, [("X-Auth-Required", "true")]).into_response()
}
