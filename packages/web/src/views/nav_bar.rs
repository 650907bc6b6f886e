use dioxus::prelude::*;
use ui::{use_auth, use_strings, LogoutButton};

use crate::Route;

/// Top bar shown on signed-in pages.
#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();
    let strings = use_strings();
    let name = auth()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        nav {
            class: "flex items-center justify-between px-6 py-3 bg-white border-b border-neutral-200",
            div {
                class: "flex items-center gap-4",
                span { class: "font-bold text-lg", "{strings.app_name}" }
                Link { to: Route::Dashboard {}, class: "text-sm text-neutral-600 no-underline", "{strings.nav_dashboard}" }
                Link { to: Route::Profile {}, class: "text-sm text-neutral-600 no-underline", "{strings.nav_profile}" }
            }
            div {
                class: "flex items-center gap-3",
                span { class: "text-sm text-neutral-600", "{name}" }
                LogoutButton {
                    class: "px-3 py-1 text-sm rounded border border-neutral-300 bg-white hover:bg-neutral-50",
                }
            }
        }
    }
}
