use api::{ApiError, Strings};
use dioxus::prelude::*;

/// Inline error for a failed fetch.
#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div {
            class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
            "{message}"
        }
    }
}

/// Message for `err`, or `None` for a 401: the client is already on its way
/// to the login page.
pub(crate) fn error_message(err: &ApiError, strings: &Strings) -> Option<String> {
    match err {
        ApiError::Unauthorized { .. } => None,
        other => Some(other.user_message(strings, strings.request_failed)),
    }
}
