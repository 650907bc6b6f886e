//! # Session models
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`SessionUser`] | The minimal user projection persisted next to the token: `id`, `username` and an optional `email`. Serialised as JSON under the user key. |
//! | [`Session`] | A bearer token together with its user. The two are only ever stored and cleared as a pair. |

use serde::{Deserialize, Serialize};

/// Minimal user profile persisted with the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionUser {
    /// Name to show in the UI.
    pub fn display_name(&self) -> &str {
        &self.username
    }
}

/// A signed-in session: bearer token plus user projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Token {}", self.token)
    }
}
