//! Route access decisions.
//!
//! Pure functions over the [`AuthState`]; the `ui` crate renders them.

use store::AuthConfig;

use super::session::AuthState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the requested page.
    Render,
    /// Session not restored yet; show a placeholder.
    Loading,
    /// Leave for another route without rendering.
    Redirect(String),
}

/// Decide what a request for `path` shows.
pub fn decide(path: &str, state: &AuthState, auth: &AuthConfig) -> GuardDecision {
    if auth.is_public(path) {
        return GuardDecision::Render;
    }
    match state {
        AuthState::Loading => GuardDecision::Loading,
        AuthState::Authenticated(_) => GuardDecision::Render,
        AuthState::Unauthenticated => {
            tracing::debug!("No session for {}, redirecting to {}", path, auth.login_route);
            GuardDecision::Redirect(auth.login_route.clone())
        }
    }
}

/// Sign-in pages send visitors who already have a session home.
pub fn redirect_if_signed_in(state: &AuthState, auth: &AuthConfig) -> Option<String> {
    state.user().map(|_| auth.home_route.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStorage, Session, SessionStore, SessionUser};

    fn present() -> AuthState {
        AuthState::Authenticated(SessionUser {
            id: 1,
            username: "alice".to_string(),
            email: None,
        })
    }

    #[test]
    fn test_public_routes_always_render() {
        let auth = AuthConfig::default();
        for state in [AuthState::Loading, AuthState::Unauthenticated, present()] {
            assert_eq!(decide("/login", &state, &auth), GuardDecision::Render);
            assert_eq!(decide("/signup/", &state, &auth), GuardDecision::Render);
            assert_eq!(decide("/forgot-password", &state, &auth), GuardDecision::Render);
        }
    }

    #[test]
    fn test_protected_route() {
        let auth = AuthConfig::default();
        assert_eq!(
            decide("/dashboard", &AuthState::Loading, &auth),
            GuardDecision::Loading
        );
        assert_eq!(
            decide("/dashboard", &AuthState::Unauthenticated, &auth),
            GuardDecision::Redirect("/login".to_string())
        );
        assert_eq!(decide("/dashboard", &present(), &auth), GuardDecision::Render);
    }

    #[test]
    fn test_custom_public_routes() {
        let auth = AuthConfig {
            public_routes: vec!["/welcome".to_string()],
            ..AuthConfig::default()
        };
        assert_eq!(
            decide("/welcome", &AuthState::Unauthenticated, &auth),
            GuardDecision::Render
        );
        assert_eq!(
            decide("/login", &AuthState::Unauthenticated, &auth),
            GuardDecision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_signed_in_visitors_go_home() {
        let auth = AuthConfig::default();
        assert_eq!(
            redirect_if_signed_in(&present(), &auth).as_deref(),
            Some("/dashboard")
        );
        assert!(redirect_if_signed_in(&AuthState::Unauthenticated, &auth).is_none());
        assert!(redirect_if_signed_in(&AuthState::Loading, &auth).is_none());
    }

    #[test]
    fn test_decisions_follow_store_lifecycle() {
        let auth = AuthConfig::default();
        let store = SessionStore::new(MemoryStorage::new());
        let state = |store: &SessionStore| AuthState::from(&store.status());

        assert_eq!(decide("/dashboard", &state(&store), &auth), GuardDecision::Loading);
        assert!(redirect_if_signed_in(&state(&store), &auth).is_none());

        store.initialize();
        assert_eq!(
            decide("/dashboard", &state(&store), &auth),
            GuardDecision::Redirect("/login".to_string())
        );
        assert_eq!(decide("/login", &state(&store), &auth), GuardDecision::Render);

        let user = match present() {
            AuthState::Authenticated(user) => user,
            _ => unreachable!(),
        };
        store
            .save(&Session {
                token: "T".to_string(),
                user,
            })
            .unwrap();
        assert_eq!(decide("/dashboard", &state(&store), &auth), GuardDecision::Render);
        assert_eq!(
            redirect_if_signed_in(&state(&store), &auth).as_deref(),
            Some("/dashboard")
        );

        store.clear();
        assert_eq!(
            decide("/profile", &state(&store), &auth),
            GuardDecision::Redirect("/login".to_string())
        );
        assert!(redirect_if_signed_in(&state(&store), &auth).is_none());
    }
}
