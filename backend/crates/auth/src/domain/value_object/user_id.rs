//! User Id Value Object
//!
//! Opaque stable identifier assigned by the identity backend. The auth
//! core never inspects its structure; it only carries it into tokens and
//! back out.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new("usr-1701");
        assert_eq!(id.as_str(), "usr-1701");
        assert_eq!(id.to_string(), "usr-1701");
        assert_eq!(id.into_inner(), "usr-1701");
    }

    #[test]
    fn test_user_id_from_conversions() {
        assert_eq!(UserId::from("a"), UserId::new("a"));
        assert_eq!(UserId::from("a".to_string()), UserId::new("a"));
    }
}
