//! Authentication context and hooks for the UI.

use std::time::Duration;

use api::{AuthState, SessionController, SessionStatus, Strings};
use dioxus::prelude::*;
use store::ClientConfig;

use crate::session::{load_config, make_controller};

/// Current authentication state.
/// Returns a signal that updates when the user logs in or out, or when the
/// session is dropped after a 401.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The session controller shared by the whole app.
pub fn use_session() -> SessionController {
    use_context::<SessionController>()
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Localized strings for the configured locale.
pub fn use_strings() -> &'static Strings {
    use_session().strings()
}

/// Provider component that restores the session and keeps it fresh.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_hook(load_config);
    let controller = use_hook(|| make_controller(&config));
    let mut auth_state = use_signal(|| AuthState::Loading);

    // Restore and validate once, then mirror every session change
    let startup = controller.clone();
    use_effect(move || {
        let controller = startup.clone();
        spawn(async move {
            let mut changes = controller.subscribe();
            let validate = controller.clone();
            spawn(async move {
                validate.start().await;
            });
            while changes.changed().await.is_ok() {
                let status = changes.borrow_and_update().clone();
                let next = next_state(&auth_state.peek(), &status);
                if let Some(next) = next {
                    auth_state.set(next);
                }
            }
        });
    });

    // Periodic token revalidation
    let revalidate = controller.clone();
    use_effect(move || {
        let controller = revalidate.clone();
        let Some(period) = controller.revalidate_interval() else {
            return;
        };
        spawn(async move {
            loop {
                sleep(period).await;
                controller.revalidate().await;
            }
        });
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| controller.clone());
    use_context_provider(|| config.clone());

    rsx! {
        {children}
    }
}

/// State to publish for a session change, `None` when nothing changed.
fn next_state(current: &AuthState, status: &SessionStatus) -> Option<AuthState> {
    let next = AuthState::from(status);
    (*current != next).then_some(next)
}

async fn sleep(period: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(period).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(period).await;
}

/// Button to log out the current user. The label defaults to the localized
/// "Logout".
#[component]
pub fn LogoutButton(
    #[props(default)] label: Option<String>,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let label = label.unwrap_or_else(|| session.strings().logout.to_string());

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| session.logout(),
            "{label}"
        }
    }
}
