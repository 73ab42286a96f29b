//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::check_session::SessionView;
use crate::domain::entity::user::User;

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub user_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub role: String,
    pub permissions: Vec<String>,
}

impl SignInResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            role: user.role.code().to_string(),
            permissions: user.permissions.clone(),
        }
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub role: Option<String>,
    pub expires_at_ms: Option<i64>,
}

impl SessionStatusResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user_id: None,
            username: None,
            role: None,
            expires_at_ms: None,
        }
    }

    pub fn from_view(view: &SessionView) -> Self {
        Self {
            authenticated: true,
            user_id: Some(view.user_id.to_string()),
            username: Some(view.username.clone()),
            role: Some(view.role.code().to_string()),
            expires_at_ms: Some(view.expires_at_ms),
        }
    }
}
