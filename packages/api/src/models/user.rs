//! # User payloads
//!
//! | Struct | Endpoint |
//! |--------|----------|
//! | [`LoginRequest`] / [`LoginResponse`] | `POST /users/login/`: flat `{ token, username, user_id, email }` |
//! | [`RegisterRequest`] / [`RegisterResponse`] | `POST /users/register/`: token nested next to a `user` object |
//! | [`UserProfile`] | `GET /users/me/`: the backend's user serializer |
//!
//! Response fields are optional where the backend may omit them; the auth
//! service decides which omissions are fatal.

use serde::{Deserialize, Serialize};
use store::SessionUser;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginResponse {
    /// Token and user projection, when the response carries all of them.
    pub fn into_session_parts(self) -> Option<(String, SessionUser)> {
        let token = self.token.filter(|t| !t.is_empty())?;
        let user = SessionUser {
            id: self.user_id?,
            username: self.username?,
            email: self.email.filter(|e| !e.is_empty()),
        };
        Some((token, user))
    }
}

/// Signup form as sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Current user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserProfile {
    /// "First Last" when either is set, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.username.clone()
        } else {
            full
        }
    }

    /// Projection persisted with the token.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone().filter(|e| !e.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_requires_token_and_identity() {
        let full: LoginResponse = serde_json::from_str(
            r#"{"token":"T","username":"alice","user_id":1,"email":"a@x.com"}"#,
        )
        .unwrap();
        let (token, user) = full.into_session_parts().unwrap();
        assert_eq!(token, "T");
        assert_eq!(user.id, 1);

        let no_token: LoginResponse =
            serde_json::from_str(r#"{"username":"alice","user_id":1}"#).unwrap();
        assert!(no_token.into_session_parts().is_none());

        let empty_token: LoginResponse =
            serde_json::from_str(r#"{"token":"","username":"alice","user_id":1}"#).unwrap();
        assert!(empty_token.into_session_parts().is_none());
    }

    #[test]
    fn test_display_name() {
        let mut profile = UserProfile {
            id: 1,
            username: "alice".to_string(),
            email: None,
            first_name: Some("Alice".to_string()),
            last_name: Some(" ".to_string()),
        };
        assert_eq!(profile.display_name(), "Alice");
        profile.first_name = None;
        assert_eq!(profile.display_name(), "alice");
    }
}
