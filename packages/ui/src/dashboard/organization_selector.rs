use api::services::organizations;
use dioxus::prelude::*;

use crate::auth::{use_session, use_strings};
use crate::icons::FaBuilding;
use crate::Icon;

/// Scope picker: "Personal" (no organization) or one of the user's
/// organizations.
#[component]
pub fn OrganizationSelector(selected: Option<i64>, on_change: EventHandler<Option<i64>>) -> Element {
    let session = use_session();
    let strings = use_strings();

    let organizations = use_resource(move || {
        let client = session.client().clone();
        async move { organizations::list(&client).await }
    });

    // Failed loads leave only the personal scope
    let options = match &*organizations.read() {
        Some(Ok(list)) => list.clone(),
        Some(Err(e)) => {
            tracing::warn!("Failed to load organizations: {}", e);
            Vec::new()
        }
        None => Vec::new(),
    };
    let current = selected.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        label {
            class: "flex items-center gap-2 text-sm",
            Icon { icon: FaBuilding, width: 14, height: 14 }
            select {
                class: "w-[200px] px-2 py-1 border border-neutral-300 rounded bg-white",
                value: "{current}",
                onchange: move |evt: FormEvent| {
                    on_change.call(evt.value().parse::<i64>().ok());
                },
                option { value: "", "{strings.personal_scope}" }
                for org in options {
                    option {
                        key: "{org.id}",
                        value: "{org.id}",
                        "{org.name}"
                    }
                }
            }
        }
    }
}
