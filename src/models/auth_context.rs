use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The session credential: a bearer token plus the moment it stops being
/// valid. Immutable once constructed; expiry is enforced by the server on
/// every authenticated call, not checked locally.
///
/// The serialized shape is the persistence wire contract:
/// `{"authToken": "...", "expiresOnIso": "2026-01-01T00:00:00Z"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuthContext {
    #[serde(rename = "authToken")]
    pub auth_token: String,
    #[serde(rename = "expiresOnIso")]
    pub expires_on: DateTime<Utc>,
}

impl AuthContext {
    pub fn new(auth_token: impl Into<String>, expires_on: DateTime<Utc>) -> Self {
        AuthContext {
            auth_token: auth_token.into(),
            expires_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> AuthContext {
        AuthContext::new("tok_abc", Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
    }

    /// Equality is structural: two contexts built from the same data compare equal.
    #[test]
    fn test_structural_equality() {
        assert_eq!(sample(), sample());
        let other = AuthContext::new("tok_other", sample().expires_on);
        assert_ne!(sample(), other);
    }

    /// The persisted JSON must use the fixed `authToken`/`expiresOnIso` keys.
    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("authToken").is_some());
        assert!(json.get("expiresOnIso").is_some());
        assert_eq!(json["authToken"], "tok_abc");
    }

    /// A malformed expiry makes the whole payload unparseable, which the
    /// store layer treats as "no session".
    #[test]
    fn test_malformed_expiry_fails_to_parse() {
        let raw = r#"{"authToken": "tok_abc", "expiresOnIso": "not-a-timestamp"}"#;
        assert!(serde_json::from_str::<AuthContext>(raw).is_err());
    }
}
