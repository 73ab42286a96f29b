//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-path errors go through
//! `auth::AuthError` and the unified `kernel` error types.

mod pages;

use auth::middleware::{GateState, require_session};
use auth::{AuthConfig, HttpCredentialVerifier, SessionTokenCodec, auth_router};
use axum::response::Html;
use axum::routing::get;
use axum::{Router, http, http::{Method, header}, middleware};
use base64::Engine;
use base64::engine::general_purpose;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Session configuration
    let mut config = match env::var("SESSION_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = general_purpose::STANDARD.decode(&secret_b64)?;
            anyhow::ensure!(
                secret_bytes.len() == 32,
                "SESSION_SECRET must decode to exactly 32 bytes"
            );
            let mut secret = [0u8; 32];
            secret.copy_from_slice(&secret_bytes);
            AuthConfig::new(secret)
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, using a random development secret");
            AuthConfig::development()
        }
        Err(_) => anyhow::bail!("SESSION_SECRET must be set in production"),
    };

    if let Ok(ttl_secs) = env::var("SESSION_TTL_SECS") {
        config.session_ttl = Duration::from_secs(ttl_secs.parse()?);
    }

    // Identity backend
    let backend_url =
        env::var("AUTH_BACKEND_URL").expect("AUTH_BACKEND_URL must be set in environment");
    let verifier = Arc::new(HttpCredentialVerifier::new(backend_url)?);

    let codec = Arc::new(SessionTokenCodec::new(
        config.session_secret,
        config.session_ttl,
    ));
    let config = Arc::new(config);

    tracing::info!(
        ttl_secs = config.session_ttl.as_secs(),
        exempt_paths = ?config.exempt_paths,
        "Auth core configured"
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Authorization gate over every route; exempt paths are matched
    // inside the middleware
    let gate = GateState {
        codec: codec.clone(),
        config: config.clone(),
    };

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(verifier, codec, config))
        .merge(pages::router())
        .route("/health", get(health))
        .route("/login", get(login_page))
        .layer(middleware::from_fn_with_state(gate, require_session))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

/// Phase-0 login page: a plain form posting to the sign-in endpoint.
async fn login_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html>
<head><title>Sign in</title></head>
<body>
  <h1>Sign in</h1>
  <form id="signin">
    <input name="username" placeholder="Username" autocomplete="username">
    <input name="password" type="password" placeholder="Password" autocomplete="current-password">
    <button type="submit">Sign in</button>
  </form>
  <p id="error" hidden></p>
  <script>
    document.getElementById('signin').addEventListener('submit', async (e) => {
      e.preventDefault();
      const data = Object.fromEntries(new FormData(e.target));
      const res = await fetch('/api/auth/signin', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(data),
      });
      if (res.ok) {
        window.location.href = '/api/portfolio';
      } else {
        const body = await res.json().catch(() => ({}));
        const error = document.getElementById('error');
        error.textContent = body.detail || 'Sign-in failed';
        error.hidden = false;
      }
    });
  </script>
</body>
</html>
"#,
    )
}
