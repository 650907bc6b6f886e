//! # API crate: REST client and session lifecycle for the finance app
//!
//! Everything the frontends need to talk to the backend lives here: the HTTP
//! wrapper that attaches the token and handles 401s, the auth service and
//! session controller, route guard decisions, typed services per resource,
//! and the localized user-facing strings.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login, logout, registration, token validation, the [`AuthState`] machine and route guard decisions |
//! | [`client`] | [`ApiClient`]: base URL, `Authorization: Token` header, 401 → clear session + redirect |
//! | [`error`] | [`ApiError`] taxonomy and the user-facing message precedence |
//! | [`i18n`] | [`Strings`] tables per [`store::Locale`] |
//! | [`models`] | Request and response payloads |
//! | [`navigator`] | [`Navigator`] seam for forced page changes |
//! | [`services`] | Typed wrappers over the finance endpoints |
//! | [`validation`] | Client-side signup checks, run before any network call |
//!
//! ## Wiring
//!
//! ```ignore
//! let config = ClientConfig::from_env();
//! let session = SessionStore::new(MemoryStorage::new());
//! let client = ApiClient::new(&config, session, BrowserNavigator);
//! let controller = SessionController::new(client, &config);
//! controller.restore();
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod i18n;
pub mod models;
pub mod navigator;
pub mod services;
pub mod validation;

#[cfg(test)]
mod testing;

pub use auth::{AuthService, AuthState, GuardDecision, SessionController};
pub use client::{ApiClient, ApiRequest, Method};
pub use error::{ApiError, ErrorBody, FieldErrors};
pub use i18n::Strings;
pub use navigator::{BrowserNavigator, Navigator, RecordingNavigator};
pub use services::transactions::Period;

pub use store::{ClientConfig, Locale, SessionStatus, SessionStore, SessionUser};
