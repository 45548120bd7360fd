use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::models::AuthContext;

/// The current session, as seen by the host application. Exactly one variant
/// describes the session at any time: either nobody is logged in (`Unknown`)
/// or we hold a verified identity with its credential (`Authenticated`).
#[derive(Debug, Clone, PartialEq)]
pub enum TorqueUser {
    Unknown,
    Authenticated(AuthenticatedTorqueUser),
}

/// A user the identity endpoint has vouched for, together with the
/// `AuthContext` their session runs on.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedTorqueUser {
    pub auth: AuthContext,
    pub id: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub customer_specific_data: Value,
}

impl TorqueUser {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, TorqueUser::Authenticated(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TorqueUser::Unknown)
    }

    /// Narrow to the authenticated variant, if that is what we hold.
    pub fn as_authenticated(&self) -> Option<&AuthenticatedTorqueUser> {
        match self {
            TorqueUser::Authenticated(user) => Some(user),
            TorqueUser::Unknown => None,
        }
    }
}

/// Response body of `GET /user/me` and `GET /user/me/auth`. The server always
/// returns the canonical token/expiry pair alongside the profile.
#[derive(Deserialize, Debug, Clone)]
pub struct UserMeResponse {
    pub auth: UserMeAuth,
    pub user: UserMeProfile,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UserMeAuth {
    pub auth_token: String,
    pub expires_on_iso: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UserMeProfile {
    pub id: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub customer_specific_data: Value,
}

impl UserMeResponse {
    /// Build the authenticated user this response describes, with `auth`
    /// taken from the response payload itself (the canonical pair).
    pub fn into_user(self) -> AuthenticatedTorqueUser {
        let auth = AuthContext::new(self.auth.auth_token, self.auth.expires_on_iso);
        self.user.into_user_with_context(auth)
    }
}

impl UserMeProfile {
    /// Build the authenticated user with a caller-supplied `AuthContext`
    /// treated as canonical instead of the response's own pair.
    pub fn into_user_with_context(self, auth: AuthContext) -> AuthenticatedTorqueUser {
        AuthenticatedTorqueUser {
            auth,
            id: self.id,
            email: self.email,
            given_name: self.given_name,
            family_name: self.family_name,
            customer_specific_data: self.customer_specific_data,
        }
    }
}
