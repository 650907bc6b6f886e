use api::services::organizations;
use dioxus::prelude::*;

use super::notice::{error_message, ErrorNotice};
use crate::auth::{use_client_config, use_session, use_strings};
use crate::format::{
    bar_width, format_currency, format_percentage, project_status_label, project_status_tone,
    UsageTier,
};

/// Projects of the selected organization (or personal projects).
#[component]
pub fn ProjectsList(organization: Option<i64>) -> Element {
    let session = use_session();
    let strings = use_strings();
    let symbol = use_client_config().display.currency_symbol;

    // Mirror the prop so the resource re-runs when the scope changes
    let mut org_signal = use_signal(|| organization);
    if *org_signal.peek() != organization {
        org_signal.set(organization);
    }

    let projects = use_resource(move || {
        let client = session.client().clone();
        let organization = org_signal();
        async move { organizations::projects(&client, organization).await }
    });

    let rendered = match &*projects.read() {
        None => rsx! {
            div { class: "py-8 text-center text-neutral-600", "{strings.loading}" }
        },
        Some(Err(e)) => match error_message(e, strings) {
            Some(message) => rsx! { ErrorNotice { message } },
            None => rsx! {},
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            div { class: "py-8 text-center text-neutral-600", "{strings.no_projects}" }
        },
        Some(Ok(list)) => rsx! {
            table {
                class: "w-full text-sm",
                thead {
                    tr {
                        class: "text-left text-neutral-500 border-b border-neutral-200",
                        th { class: "py-2", "{strings.field_name}" }
                        th { class: "py-2", "{strings.column_status}" }
                        th { class: "py-2", "{strings.column_budget}" }
                        th { class: "py-2", "{strings.column_spent}" }
                        th { class: "py-2 w-[160px]", "{strings.column_progress}" }
                    }
                }
                tbody {
                    for project in list.iter().cloned() {
                        tr {
                            key: "{project.id}",
                            class: "border-b border-neutral-100",
                            td {
                                class: "py-2",
                                div { class: "font-medium", "{project.name}" }
                                if let Some(description) = &project.description {
                                    div { class: "text-xs text-neutral-500 truncate max-w-[240px]", "{description}" }
                                }
                            }
                            td {
                                class: "py-2",
                                span {
                                    class: "text-xs px-2 py-0.5 rounded {project_status_tone(project.status)}",
                                    "{project_status_label(project.status, strings)}"
                                }
                            }
                            td { class: "py-2", "{format_currency(project.budget, &symbol)}" }
                            td { class: "py-2", "{format_currency(project.budget_spent, &symbol)}" }
                            td {
                                class: "py-2",
                                div {
                                    class: "flex items-center gap-2",
                                    div {
                                        class: "h-2 flex-1 rounded-full bg-neutral-100 overflow-hidden",
                                        div {
                                            class: "h-full {UsageTier::from_percentage(project.budget_percentage).bar_class()}",
                                            style: "width: {bar_width(project.budget_percentage)}%",
                                        }
                                    }
                                    span { class: "text-xs text-neutral-500", "{format_percentage(project.budget_percentage)}" }
                                }
                            }
                        }
                    }
                }
            }
        },
    };
    rendered
}
