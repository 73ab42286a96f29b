//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::client::extract_client_ip;

use crate::application::config::AuthConfig;
use crate::application::{CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase};
use crate::domain::token::SessionTokenCodec;
use crate::domain::verifier::CredentialVerifier;
use crate::error::AuthResult;
use crate::presentation::dto::{SessionStatusResponse, SignInRequest, SignInResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<V>
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    pub verifier: Arc<V>,
    pub codec: Arc<SessionTokenCodec>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<V>(
    State(state): State<AuthAppState<V>>,
    headers: HeaderMap,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, None);

    let use_case = SignInUseCase::new(state.verifier.clone(), state.codec.clone());

    let output = use_case
        .execute(SignInInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    tracing::debug!(
        user_id = %output.user.user_id,
        client_ip = ?client_ip,
        "Session cookie issued"
    );

    let cookie = state.config.cookie().build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse::from_user(&output.user)),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<V>(
    State(state): State<AuthAppState<V>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    let use_case = SignOutUseCase::new(state.codec.clone());
    use_case.execute(token.as_deref());

    let cookie = state.config.cookie().build_delete_cookie();

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<V>(
    State(state): State<AuthAppState<V>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.codec.clone());

    let view = token.and_then(|token| use_case.execute(&token).ok());

    match view {
        Some(view) => Json(SessionStatusResponse::from_view(&view)),
        None => Json(SessionStatusResponse::anonymous()),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}
