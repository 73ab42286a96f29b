//! Session Token Codec
//!
//! Signed, self-contained session tokens in the form
//! `base64url(claims JSON) "." base64url(HMAC-SHA256 signature)`.
//! The signature covers the encoded claims, so any tampering with the
//! payload invalidates the token.
//!
//! Verification is a pure function of the token and the clock: no I/O,
//! no server-side lookup.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;
use thiserror::Error;

use crate::domain::entity::session_claims::SessionClaims;
use crate::domain::entity::user::User;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

type HmacSha256 = Hmac<Sha256>;

/// Reasons a presented token is rejected. Every variant denies; they are
/// distinguished for logging and tests only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not two dot-separated base64url parts, or claims not valid JSON
    #[error("Malformed session token")]
    Malformed,

    /// Signature does not verify against the configured secret
    #[error("Session token signature mismatch")]
    BadSignature,

    /// Expiry claim lies in the past
    #[error("Session token expired")]
    Expired,

    /// Signature verified but the role claim is outside the closed set
    #[error("Unrecognized role code {code:?} in session token")]
    UnrecognizedRole { code: String },
}

/// Claims as they travel inside the signed payload.
///
/// The role stays a raw string here; it is matched against the closed
/// enum only after the signature checks out. Unknown fields in a
/// presented payload are dropped by deserialization, never propagated.
#[derive(Serialize, Deserialize)]
struct ClaimsWire {
    user_id: String,
    username: String,
    role: String,
    issued_at_ms: i64,
    expires_at_ms: i64,
}

/// Stateless codec for session tokens.
///
/// Holds the signing secret and the session TTL. Shared across requests
/// behind an `Arc`; all methods take `&self`.
pub struct SessionTokenCodec {
    secret: [u8; 32],
    ttl: Duration,
}

impl SessionTokenCodec {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    /// Configured session TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mint a signed token for an authenticated user.
    ///
    /// Claims are exactly: subject id, username, role, issued-at, and
    /// expiry = issued-at + TTL. The role is typed, so a role outside
    /// the closed set cannot reach this point.
    pub fn issue(&self, user: &User) -> String {
        self.issue_at(user, Utc::now().timestamp_millis())
    }

    /// Clock-explicit form of [`issue`](Self::issue).
    pub fn issue_at(&self, user: &User, now_ms: i64) -> String {
        let wire = ClaimsWire {
            user_id: user.user_id.as_str().to_string(),
            username: user.username.clone(),
            role: user.role.code().to_string(),
            issued_at_ms: now_ms,
            expires_at_ms: now_ms + self.ttl.as_millis() as i64,
        };

        let payload =
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&wire).expect("claims serialize to JSON"));

        format!("{}.{}", payload, self.sign(&payload))
    }

    /// Decode and validate a presented token against the current time.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.verify_at(token, Utc::now().timestamp_millis())
    }

    /// Clock-explicit form of [`verify`](Self::verify): a pure function
    /// of the token and `now_ms`.
    ///
    /// Checks run in order: shape, signature, expiry, role. The first
    /// failure wins.
    pub fn verify_at(&self, token: &str, now_ms: i64) -> Result<SessionClaims, TokenError> {
        let (payload, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let claims_json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let wire: ClaimsWire =
            serde_json::from_slice(&claims_json).map_err(|_| TokenError::Malformed)?;

        if now_ms > wire.expires_at_ms {
            return Err(TokenError::Expired);
        }

        let role = UserRole::parse_code(&wire.role).ok_or_else(|| TokenError::UnrecognizedRole {
            code: wire.role.clone(),
        })?;

        Ok(SessionClaims {
            user_id: UserId::from(wire.user_id),
            username: wire.username,
            role,
            issued_at_ms: wire.issued_at_ms,
            expires_at_ms: wire.expires_at_ms,
        })
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}
