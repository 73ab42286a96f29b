//! Phase-0 placeholder pages
//!
//! Dashboard surfaces that exist so the authorization gate has routes to
//! protect. Portfolio, performance, risk, and signal logic arrives in
//! later phases; every handler returns an explicit placeholder payload.
//!
//! Each handler reads the [`AuthenticatedUser`] extension the gate
//! inserts, which is how the authenticated identity reaches the rest of
//! the application.

use auth::middleware::AuthenticatedUser;
use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

pub fn router() -> Router {
    Router::new()
        .route("/api/portfolio", get(portfolio))
        .route("/api/performance", get(performance))
        .route("/api/risk", get(risk))
        .route("/api/signals", get(signals))
}

/// GET /api/portfolio
async fn portfolio(Extension(user): Extension<AuthenticatedUser>) -> Json<Value> {
    Json(json!({
        "page": "portfolio",
        "phase": 0,
        "username": user.username,
        "positions": [],
    }))
}

/// GET /api/performance
async fn performance(Extension(user): Extension<AuthenticatedUser>) -> Json<Value> {
    Json(json!({
        "page": "performance",
        "phase": 0,
        "username": user.username,
        "metrics": {},
    }))
}

/// GET /api/risk
async fn risk(Extension(user): Extension<AuthenticatedUser>) -> Json<Value> {
    Json(json!({
        "page": "risk",
        "phase": 0,
        "username": user.username,
        "limits": {},
    }))
}

/// GET /api/signals
async fn signals(Extension(user): Extension<AuthenticatedUser>) -> Json<Value> {
    Json(json!({
        "page": "signals",
        "phase": 0,
        "role": user.role.code(),
        "signals": [],
    }))
}
