//! # Session controller
//!
//! Drives the session lifecycle the views observe:
//!
//! 1. **Restore**: on startup the stored slot is read once
//!    ([`SessionController::restore`]). Until then the state is
//!    [`AuthState::Loading`] and guarded views must not decide anything.
//!    [`SessionController::start`] restores and then checks a restored token
//!    right away, without waiting for the first revalidation period.
//! 2. **Revalidate**: while signed in, the token is checked against
//!    `/users/me/` every [`store::AuthConfig::revalidate_interval_secs`]
//!    ([`SessionController::revalidate`]). A failure signs the user out and
//!    navigates to the login route exactly once.
//! 3. **Login / logout / register**: delegated to [`AuthService`]; the state
//!    follows through the [`store::SessionStore`] watch channel, so every
//!    subscriber sees the change before any redirect is issued.

use std::time::Duration;

use store::{ClientConfig, SessionStatus, SessionUser};
use tokio::sync::watch;

use super::service::AuthService;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::i18n::Strings;
use crate::models::RegisterRequest;

/// What the UI knows about the current user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

impl From<&SessionStatus> for AuthState {
    fn from(status: &SessionStatus) -> Self {
        match status {
            SessionStatus::Pending => AuthState::Loading,
            SessionStatus::Present(user) => AuthState::Authenticated(user.clone()),
            SessionStatus::Absent => AuthState::Unauthenticated,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionController {
    auth: AuthService,
    revalidate_interval: Option<Duration>,
}

impl SessionController {
    pub fn new(client: ApiClient, config: &ClientConfig) -> Self {
        Self {
            auth: AuthService::new(client)
                .with_strings(Strings::for_locale(config.display.locale)),
            revalidate_interval: config.revalidate_interval(),
        }
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn client(&self) -> &ApiClient {
        self.auth.client()
    }

    pub fn strings(&self) -> &'static Strings {
        self.auth.strings()
    }

    /// Period between revalidations; `None` when disabled.
    pub fn revalidate_interval(&self) -> Option<Duration> {
        self.revalidate_interval
    }

    pub fn state(&self) -> AuthState {
        AuthState::from(&self.client().session().status())
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.client().session().subscribe()
    }

    /// Read the persisted session and leave the loading state.
    pub fn restore(&self) -> AuthState {
        let session = self.client().session().initialize();
        match &session {
            Some(s) => tracing::info!("Restored session for {}", s.user.username),
            None => tracing::debug!("No stored session"),
        }
        self.state()
    }

    /// Restore the stored session, then validate a restored token at once.
    ///
    /// The restored state is published before the network call, so views
    /// render optimistically while the check runs.
    pub async fn start(&self) -> AuthState {
        let restored = self.restore();
        if !restored.is_authenticated() {
            return restored;
        }
        self.revalidate().await
    }

    /// Check the stored token against the backend.
    ///
    /// Does nothing unless signed in. When the check drops the session the
    /// login route is visited once: by the client for a 401, here for
    /// everything else. A session that survived the failure (the token was
    /// accepted but the refreshed user could not be stored) stays put.
    pub async fn revalidate(&self) -> AuthState {
        if !self.state().is_authenticated() {
            return self.state();
        }

        match self.auth.refresh().await {
            Ok(profile) => {
                tracing::debug!("Session still valid for {}", profile.username);
            }
            Err(ApiError::Unauthorized { .. }) => {
                tracing::info!("Session rejected by the backend");
            }
            Err(e) if self.state().is_authenticated() => {
                tracing::warn!("Revalidation incomplete, keeping session: {}", e);
            }
            Err(e) => {
                tracing::warn!("Revalidation failed, signing out: {}", e);
                let client = self.client();
                client.navigator().navigate(client.login_route());
            }
        }
        self.state()
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<SessionUser, ApiError> {
        self.auth.login(username, password).await.map(|s| s.user)
    }

    pub async fn register(&self, form: &RegisterRequest) -> Result<Option<SessionUser>, ApiError> {
        self.auth.register(form).await.map(|s| s.map(|s| s.user))
    }

    pub fn logout(&self) {
        self.auth.logout();
    }
}
