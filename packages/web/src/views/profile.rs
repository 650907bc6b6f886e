//! Profile page: the backend's view of the signed-in user.

use dioxus::prelude::*;
use ui::{use_session, ErrorNotice, LogoutButton};

use super::NavBar;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let strings = session.strings();

    // Also refreshes the stored user projection
    let profile = use_resource(move || {
        let session = session.clone();
        async move { session.auth().refresh().await }
    });

    let body = match &*profile.read() {
        None => rsx! {
            p { class: "text-neutral-600", "{strings.loading}" }
        },
        Some(Err(api::ApiError::Unauthorized { .. })) => rsx! {},
        Some(Err(e)) => rsx! {
            ErrorNotice { message: e.user_message(strings, strings.request_failed) }
        },
        Some(Ok(profile)) => {
            let full_name = profile.display_name();
            rsx! {
                dl {
                    class: "grid grid-cols-[120px_1fr] gap-y-2 text-sm",
                    dt { class: "text-neutral-500", "{strings.field_username}" }
                    dd { class: "m-0", "{profile.username}" }
                    dt { class: "text-neutral-500", "{strings.field_email}" }
                    dd { class: "m-0", {profile.email.clone().unwrap_or_default()} }
                    dt { class: "text-neutral-500", "{strings.field_name}" }
                    dd { class: "m-0", "{full_name}" }
                }
            }
        }
    };

    rsx! {
        NavBar {}
        main {
            class: "max-w-xl mx-auto p-6 flex flex-col gap-6",
            h1 { class: "text-2xl font-bold m-0", "{strings.nav_profile}" }
            section {
                class: "rounded-lg border border-neutral-200 bg-white p-4",
                {body}
            }
            div {
                LogoutButton {
                    class: "px-3 py-2 text-sm rounded border border-neutral-300 bg-white hover:bg-neutral-50",
                }
            }
        }
    }
}
