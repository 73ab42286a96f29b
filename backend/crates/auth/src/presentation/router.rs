//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::token::SessionTokenCodec;
use crate::domain::verifier::CredentialVerifier;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any verifier implementation.
///
/// Takes shared handles so the same codec and config can also feed the
/// gate middleware state.
pub fn auth_router<V>(
    verifier: Arc<V>,
    codec: Arc<SessionTokenCodec>,
    config: Arc<AuthConfig>,
) -> Router
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        verifier,
        codec,
        config,
    };

    Router::new()
        .route("/signin", post(handlers::sign_in::<V>))
        .route("/signout", post(handlers::sign_out::<V>))
        .route("/status", get(handlers::session_status::<V>))
        .with_state(state)
}
