//! Registration page view with username/email/password form.

use api::models::RegisterRequest;
use api::FieldErrors;
use dioxus::prelude::*;
use ui::{use_session, ErrorNotice};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let strings = session.strings();
    let nav = use_navigator();
    let mut form = use_signal(RegisterRequest::default);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            field_errors.set(FieldErrors::new());
            loading.set(true);

            let request = form();
            let result = session.register(&request).await;
            loading.set(false);
            match result {
                // Signed in: the layout redirects once the session flips
                Ok(Some(_)) => {}
                Ok(None) => {
                    tracing::info!("Account {} created without a session", request.username);
                    nav.replace(Route::Login {});
                }
                Err(e) => {
                    let fields = e.field_errors();
                    if fields.is_empty() {
                        error.set(Some(e.user_message(strings, strings.signup_failed)));
                    } else {
                        field_errors.set(fields);
                    }
                }
            }
        });
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "{strings.sign_up_title}"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "{strings.sign_up_subtitle}"
            }

            form {
                onsubmit: handle_signup,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(message) = error() {
                    ErrorNotice { message }
                }
                if let Some(message) = field_error("error").or_else(|| field_error("non_field_errors")) {
                    ErrorNotice { message }
                }

                div {
                    class: "flex gap-2",
                    input {
                        class: "w-full px-3 py-2 border border-neutral-300 rounded",
                        r#type: "text",
                        placeholder: strings.field_first_name,
                        value: form.read().first_name.clone(),
                        oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                    }
                    input {
                        class: "w-full px-3 py-2 border border-neutral-300 rounded",
                        r#type: "text",
                        placeholder: strings.field_last_name,
                        value: form.read().last_name.clone(),
                        oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                    }
                }

                FormField {
                    input_type: "text",
                    placeholder: strings.field_username,
                    value: form.read().username.clone(),
                    error: field_error("username"),
                    oninput: move |value| form.write().username = value,
                }

                FormField {
                    input_type: "email",
                    placeholder: strings.field_email,
                    value: form.read().email.clone(),
                    error: field_error("email"),
                    oninput: move |value| form.write().email = value,
                }

                FormField {
                    input_type: "password",
                    placeholder: strings.field_password_hint,
                    value: form.read().password.clone(),
                    error: field_error("password"),
                    oninput: move |value| form.write().password = value,
                }

                FormField {
                    input_type: "password",
                    placeholder: strings.field_confirm_password,
                    value: form.read().password2.clone(),
                    error: field_error("password2"),
                    oninput: move |value| form.write().password2 = value,
                }

                button {
                    class: "w-full px-3 py-2 rounded bg-neutral-900 text-white text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "{strings.creating_account}" } else { "{strings.sign_up}" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "{strings.have_account}"
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Login {},
                    "{strings.sign_in}"
                }
            }
        }
    }
}

#[component]
fn FormField(
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-1",
            input {
                class: if error.is_some() {
                    "w-full px-3 py-2 border border-red-400 rounded"
                } else {
                    "w-full px-3 py-2 border border-neutral-300 rounded"
                },
                r#type: input_type,
                placeholder: placeholder,
                value: value,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(ref message) = error {
                span { class: "text-xs text-red-600", "{message}" }
            }
        }
    }
}
