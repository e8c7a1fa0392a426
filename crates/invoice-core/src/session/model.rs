//! Session domain model.

use serde::{Deserialize, Serialize};

/// Durable marker that a user has completed login.
///
/// Serialized as `{ "username": ..., "isAuthenticated": true }`. Sessions
/// written by this system always carry `is_authenticated = true`; a session
/// is either present and authenticated or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Name entered on the login screen. Not validated.
    pub username: String,
    /// Always `true` for sessions created through [`Session::authenticated`].
    pub is_authenticated: bool,
}

impl Session {
    /// Creates an authenticated session for `username`.
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            is_authenticated: true,
        }
    }
}
