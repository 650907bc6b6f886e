//! # Auth service: login, logout, registration, token validation
//!
//! Thin functions over the fixed `/users/...` endpoints. Persistence goes
//! through the client's [`store::SessionStore`], so the token/user pair is
//! always written and cleared together.
//!
//! | Method | Endpoint | Session effect |
//! |--------|----------|----------------|
//! | [`AuthService::login`] | `POST /users/login/` | Stored on success; response without a token is an error |
//! | [`AuthService::logout`] | none | Cleared, then navigation to the login route |
//! | [`AuthService::register`] | `POST /users/register/` | Stored only when the response nests a token |
//! | [`AuthService::validate_token`] | `GET /users/me/` | Cleared on **any** failure |
//! | [`AuthService::refresh`] | `GET /users/me/` | Stored user replaced by the fresh profile |

use store::{Session, SessionUser};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::i18n::Strings;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile};
use crate::validation::validate_signup;

#[derive(Clone, Debug)]
pub struct AuthService {
    client: ApiClient,
    strings: &'static Strings,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            strings: Strings::en(),
        }
    }

    /// Builder method to localize validation messages.
    pub fn with_strings(mut self, strings: &'static Strings) -> Self {
        self.strings = strings;
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn strings(&self) -> &'static Strings {
        self.strings
    }

    /// Log in with username and password and persist the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        tracing::info!("Attempting login for {}", username);

        let response: LoginResponse = self
            .client
            .post("/users/login/")
            .anonymous()
            .json(&LoginRequest { username, password })
            .fetch()
            .await?;

        let Some((token, user)) = response.into_session_parts() else {
            tracing::error!("Login response missing token or user identity");
            return Err(ApiError::InvalidLoginResponse);
        };

        let session = Session { token, user };
        self.client.session().save(&session)?;
        tracing::info!("Login successful for {}", session.user.username);
        Ok(session)
    }

    /// Clear the session and navigate to the login page.
    pub fn logout(&self) {
        tracing::info!("Logging out user");
        self.client.expire_session();
    }

    /// Register a new account. The form is validated locally first; an
    /// invalid form never reaches the network.
    ///
    /// Returns the stored session when the backend signed the user in.
    pub async fn register(&self, form: &RegisterRequest) -> Result<Option<Session>, ApiError> {
        validate_signup(form, self.strings).map_err(ApiError::Validation)?;

        let response: RegisterResponse = self
            .client
            .post("/users/register/")
            .anonymous()
            .json(form)
            .fetch()
            .await?;

        let token = response.token.filter(|t| !t.is_empty());
        match (token, response.user) {
            (Some(token), Some(profile)) => {
                let session = Session {
                    token,
                    user: profile.to_session_user(),
                };
                self.client.session().save(&session)?;
                tracing::info!("Registered and signed in {}", session.user.username);
                Ok(Some(session))
            }
            (Some(_), None) => {
                tracing::warn!("Register response has a token but no user; not signing in");
                Ok(None)
            }
            (None, _) => Ok(None),
        }
    }

    /// Ask the backend who the token belongs to. Any failure clears the
    /// session before the error is returned.
    pub async fn validate_token(&self) -> Result<UserProfile, ApiError> {
        match self.client.get("/users/me/").fetch::<UserProfile>().await {
            Ok(profile) => Ok(profile),
            Err(e) => {
                tracing::error!("Token validation failed: {}", e);
                self.client.session().clear();
                Err(e)
            }
        }
    }

    /// Validate the token and store the fresh user projection.
    pub async fn refresh(&self) -> Result<UserProfile, ApiError> {
        let profile = self.validate_token().await?;
        self.client
            .session()
            .update_user(&profile.to_session_user())?;
        Ok(profile)
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.client.session().user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().token().is_some()
    }
}
