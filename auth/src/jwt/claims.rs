use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::role::Role;

/// Access token claim set.
///
/// Every field is mandatory: a token missing any of them fails to decode.
/// The subject is the account's username, not its database id, so the
/// authorization pipeline resolves identities by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Account role
    pub role: Role,

    /// Expiration time (Unix timestamp, UTC)
    pub exp: i64,
}

impl Claims {
    /// Create claims expiring `ttl` from now.
    pub fn new(subject: impl Into<String>, role: Role, ttl: Duration) -> Self {
        Self {
            sub: subject.into(),
            role,
            exp: (Utc::now() + ttl).timestamp(),
        }
    }

    /// Strict expiry check: a token expiring exactly "now" is invalid.
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_expiry_from_ttl() {
        let before = Utc::now().timestamp();
        let claims = Claims::new("alice", Role::User, Duration::minutes(30));
        let after = Utc::now().timestamp();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, Role::User);
        assert!(claims.exp >= before + 30 * 60);
        assert!(claims.exp <= after + 30 * 60);
    }

    #[test]
    fn test_is_expired_is_strict() {
        let claims = Claims {
            sub: "alice".to_string(),
            role: Role::User,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // exactly at expiry
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_deserialize_requires_all_claims() {
        assert!(serde_json::from_str::<Claims>(r#"{"role":"user","exp":1}"#).is_err());
        assert!(serde_json::from_str::<Claims>(r#"{"sub":"alice","exp":1}"#).is_err());
        assert!(serde_json::from_str::<Claims>(r#"{"sub":"alice","role":"user"}"#).is_err());
    }
}
