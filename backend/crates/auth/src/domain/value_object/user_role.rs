//! User Role Value Object
//!
//! Closed set of roles admitted by the authorization gate. Inside typed
//! code an out-of-set role is unrepresentable; only the token decode
//! boundary parses a role from the wire, and that parse is strict:
//! exact, case-sensitive match on the wire code, nothing else.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Trader,
    Viewer,
}

impl UserRole {
    /// Every role the gate admits. Flat allow-list: Viewer is not "lesser"
    /// than Trader for gate purposes.
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Trader, UserRole::Viewer];

    /// Wire code carried in tokens and API responses.
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Admin => "ADMIN",
            Trader => "TRADER",
            Viewer => "VIEWER",
        }
    }

    /// Parse a wire code. Exact match only: `"admin"` and `""` are both
    /// rejected, even though `"ADMIN"` is accepted.
    #[inline]
    pub fn parse_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "ADMIN" => Some(Admin),
            "TRADER" => Some(Trader),
            "VIEWER" => Some(Viewer),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_codes() {
        assert_eq!(UserRole::Admin.code(), "ADMIN");
        assert_eq!(UserRole::Trader.code(), "TRADER");
        assert_eq!(UserRole::Viewer.code(), "VIEWER");
    }

    #[test]
    fn test_user_role_parse_code() {
        assert_eq!(UserRole::parse_code("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse_code("TRADER"), Some(UserRole::Trader));
        assert_eq!(UserRole::parse_code("VIEWER"), Some(UserRole::Viewer));
    }

    #[test]
    fn test_parse_code_is_case_sensitive() {
        assert_eq!(UserRole::parse_code("admin"), None);
        assert_eq!(UserRole::parse_code("Admin"), None);
        assert_eq!(UserRole::parse_code("trader"), None);
        assert_eq!(UserRole::parse_code("viewer"), None);
    }

    #[test]
    fn test_parse_code_rejects_outsiders() {
        assert_eq!(UserRole::parse_code(""), None);
        assert_eq!(UserRole::parse_code("SUPERUSER"), None);
        assert_eq!(UserRole::parse_code("ADMIN "), None);
        assert_eq!(UserRole::parse_code(" ADMIN"), None);
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Admin.to_string(), "ADMIN");
        assert_eq!(UserRole::Trader.to_string(), "TRADER");
        assert_eq!(UserRole::Viewer.to_string(), "VIEWER");
    }

    #[test]
    fn test_all_roles_round_trip() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::parse_code(role.code()), Some(role));
        }
    }
}
