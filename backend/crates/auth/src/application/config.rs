//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Default session TTL (8 hours)
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(8 * 3600);

/// Auth application configuration
///
/// There is no `Default`: a zeroed signing secret must never exist by
/// accident. Construct with [`AuthConfig::new`] from an
/// environment-provided secret, or [`AuthConfig::development`] in debug
/// setups.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Path patterns that bypass the authorization gate entirely.
    ///
    /// A pattern ending in `/` matches as a prefix; any other pattern
    /// matches the path exactly. Enumerated explicitly: there is no
    /// default-allow anywhere else.
    pub exempt_paths: Vec<String>,
}

impl AuthConfig {
    /// Create config around an externally supplied secret.
    pub fn new(session_secret: [u8; 32]) -> Self {
        Self {
            session_cookie_name: "trading_session".to_string(),
            session_secret,
            session_ttl: DEFAULT_SESSION_TTL,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            exempt_paths: Self::default_exempt_paths(),
        }
    }

    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret)
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// The routes that must stay reachable without a session: the auth
    /// endpoints themselves, the health check, static assets, and the
    /// login page.
    pub fn default_exempt_paths() -> Vec<String> {
        vec![
            "/api/auth/".to_string(),
            "/health".to_string(),
            "/assets/".to_string(),
            "/login".to_string(),
        ]
    }

    /// Whether `path` bypasses the authorization gate.
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.iter().any(|pattern| {
            if let Some(prefix) = pattern.strip_suffix('/') {
                path == prefix || path.starts_with(pattern.as_str())
            } else {
                path == pattern
            }
        })
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Cookie settings for the session cookie.
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exempt_prefix_patterns() {
        let config = AuthConfig::development();

        assert!(config.is_exempt("/api/auth/signin"));
        assert!(config.is_exempt("/api/auth/signout"));
        assert!(config.is_exempt("/api/auth"));
        assert!(config.is_exempt("/assets/app.js"));
    }

    #[test]
    fn test_exempt_exact_patterns() {
        let config = AuthConfig::development();

        assert!(config.is_exempt("/health"));
        assert!(config.is_exempt("/login"));
        // Exact patterns do not match extensions of themselves
        assert!(!config.is_exempt("/healthcheck"));
        assert!(!config.is_exempt("/login/other"));
    }

    #[test]
    fn test_everything_else_is_gated() {
        let config = AuthConfig::development();

        assert!(!config.is_exempt("/"));
        assert!(!config.is_exempt("/api/portfolio"));
        assert!(!config.is_exempt("/api/authx"));
    }

    #[test]
    fn test_cookie_settings() {
        let config = AuthConfig::development();
        let cookie = config.cookie();

        assert_eq!(cookie.name, "trading_session");
        assert!(cookie.http_only);
        assert!(!cookie.secure);
        assert_eq!(cookie.max_age_secs, Some(8 * 3600));
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
    }
}
