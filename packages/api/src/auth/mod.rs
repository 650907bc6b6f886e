//! Authentication: token login, session lifecycle and route access.

pub mod guard;
mod service;
mod session;

pub use guard::{decide, redirect_if_signed_in, GuardDecision};
pub use service::AuthService;
pub use session::{AuthState, SessionController};
