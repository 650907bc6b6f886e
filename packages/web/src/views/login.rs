//! Login page view with username/password form.

use dioxus::prelude::*;
use ui::{use_session, ErrorNotice};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let strings = session.strings();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // On success the session flips to signed in and the layout sends the
    // visitor home.
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = session.login(username().trim(), &password()).await;
            loading.set(false);
            if let Err(e) = result {
                error.set(Some(e.user_message(strings, strings.login_failed)));
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "{strings.app_name}"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "{strings.sign_in_subtitle}"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(message) = error() {
                    ErrorNotice { message }
                }

                input {
                    class: "w-full px-3 py-2 border border-neutral-300 rounded",
                    r#type: "text",
                    placeholder: strings.field_username,
                    autocomplete: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    class: "w-full px-3 py-2 border border-neutral-300 rounded",
                    r#type: "password",
                    placeholder: strings.field_password,
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "w-full px-3 py-2 rounded bg-neutral-900 text-white text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "{strings.loading}" } else { "{strings.sign_in}" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "{strings.no_account}"
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Signup {},
                    "{strings.sign_up}"
                }
            }
        }
    }
}
