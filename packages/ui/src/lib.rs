//! Shared UI for the finance client: the auth provider and route guards every
//! platform wraps its router in, plus the dashboard components.
//!
//! Components here never touch a router. Anything that navigates takes an
//! `on_redirect`/`on_change` callback and the platform crate decides what
//! that means.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, use_client_config, use_session, use_strings, AuthProvider, LogoutButton};
pub use api::AuthState;

mod guard;
pub use guard::{RouteGuard, SignedOutOnly};

pub mod session;

pub mod format;

pub mod dashboard;
pub use dashboard::{ErrorNotice, FinancialDashboard};
