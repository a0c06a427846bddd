//! Actor identity and roles, as reported by the external auth backend.
//!
//! Session management itself lives outside this workspace; these types are
//! the contract the storage layers consume.

use serde::{Deserialize, Serialize};

/// Access role attached to a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Superadmin,
}

/// The authenticated actor, as resolved by the auth backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub email: Option<String>,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_superadmin(&self) -> bool {
        self.role == Role::Superadmin
    }
}

/// Session lookup, delegated to the external auth backend.
pub trait AuthProvider: Send + Sync {
    /// The current session's user, or `None` when signed out.
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Fixed-session provider for tests and embedding hosts that manage their
/// own session lifecycle.
#[derive(Debug, Clone, Default)]
pub struct StaticAuth {
    user: Option<CurrentUser>,
}

impl StaticAuth {
    pub fn signed_in(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl AuthProvider for StaticAuth {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Superadmin).unwrap(), "\"superadmin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn static_auth_reports_session() {
        let user = CurrentUser {
            id: "u-1".into(),
            email: Some("ana@example.com".into()),
            role: Role::User,
        };
        assert_eq!(StaticAuth::signed_in(user.clone()).current_user(), Some(user));
        assert_eq!(StaticAuth::signed_out().current_user(), None);
    }
}
