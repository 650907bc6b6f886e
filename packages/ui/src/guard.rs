//! Route guards rendered around page content.
//!
//! Platform packages pass the current path and a navigation callback; the
//! decision itself is [`api::auth::decide`].

use api::auth::{decide, redirect_if_signed_in, GuardDecision};
use dioxus::prelude::*;

use crate::auth::{use_auth, use_client_config, use_strings};

/// Renders `children` only when the session allows it. Protected routes wait
/// for the session to be restored, then either render or redirect to login.
#[component]
pub fn RouteGuard(path: String, on_redirect: EventHandler<String>, children: Element) -> Element {
    let auth = use_auth();
    let config = use_client_config();
    let strings = use_strings();

    match decide(&path, &auth(), &config.auth) {
        GuardDecision::Render => rsx! {
            {children}
        },
        GuardDecision::Loading => rsx! {
            div {
                class: "flex items-center justify-center min-h-screen text-neutral-600",
                "{strings.loading}"
            }
        },
        GuardDecision::Redirect(target) => {
            on_redirect.call(target);
            rsx! {}
        }
    }
}

/// For sign-in pages: visitors that already have a session are sent to the
/// home route instead.
#[component]
pub fn SignedOutOnly(on_redirect: EventHandler<String>, children: Element) -> Element {
    let auth = use_auth();
    let config = use_client_config();

    match redirect_if_signed_in(&auth(), &config.auth) {
        Some(home) => {
            on_redirect.call(home);
            rsx! {}
        }
        None => rsx! {
            {children}
        },
    }
}
