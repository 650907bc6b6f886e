use api::services::{budgets, dashboard, transactions};
use api::{Period, Strings};
use dioxus::prelude::*;

use super::notice::{error_message, ErrorNotice};
use super::{BudgetProgress, OrganizationSelector, Overview, ProjectsList, RecentTransactions};
use crate::auth::{use_client_config, use_session, use_strings};
use crate::format::format_currency;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Projects,
    Budgets,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Overview, Tab::Projects, Tab::Budgets];

    fn label(&self, strings: &Strings) -> &'static str {
        match self {
            Tab::Overview => strings.tab_overview,
            Tab::Projects => strings.tab_projects,
            Tab::Budgets => strings.tab_budgets,
        }
    }
}

/// Main dashboard: balance cards, this month's summary, projects and budgets
/// for the selected organization scope.
#[component]
pub fn FinancialDashboard() -> Element {
    let session = use_session();
    let strings = use_strings();
    let symbol = use_client_config().display.currency_symbol;
    let mut organization = use_signal(|| None::<i64>);
    let mut tab = use_signal(|| Tab::Overview);

    let overview_session = session.clone();
    let overview = use_resource(move || {
        let client = overview_session.client().clone();
        async move { dashboard::overview(&client).await }
    });

    let summary_session = session.clone();
    let summary = use_resource(move || {
        let client = summary_session.client().clone();
        let organization = organization();
        async move { transactions::summary(&client, Period::Month, organization).await }
    });

    let budget_summary = use_resource(move || {
        let client = session.client().clone();
        let organization = organization();
        async move { budgets::summary(&client, organization).await }
    });

    let summary = match &*summary.read() {
        None => {
            return rsx! {
                div { class: "py-12 text-center text-neutral-600", "{strings.loading_dashboard}" }
            };
        }
        Some(Err(e)) => {
            return match error_message(e, strings) {
                Some(message) => rsx! { ErrorNotice { message } },
                None => rsx! {},
            };
        }
        Some(Ok(summary)) => summary.clone(),
    };

    let total_balance = match &*overview.read() {
        Some(Ok(overview)) => Some(overview.total_balance),
        _ => None,
    };

    rsx! {
        div {
            class: "flex flex-col gap-6 p-6",
            div {
                class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold", "{strings.nav_dashboard}" }
                OrganizationSelector {
                    selected: organization(),
                    on_change: move |id| organization.set(id),
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-4 gap-4",
                if let Some(balance) = total_balance {
                    StatCard { title: strings.total_balance, value: format_currency(balance, &symbol), tone: "" }
                }
                StatCard { title: strings.income, value: format_currency(summary.income, &symbol), tone: "text-emerald-600" }
                StatCard { title: strings.expenses, value: format_currency(summary.expenses, &symbol), tone: "text-red-600" }
                StatCard {
                    title: strings.balance,
                    value: format_currency(summary.balance, &symbol),
                    tone: { if summary.balance < 0.0 { "text-red-600" } else { "text-emerald-600" } },
                }
            }
            div {
                class: "flex gap-2 border-b border-neutral-200",
                for option in Tab::ALL {
                    button {
                        key: "{option.label(strings)}",
                        class: if tab() == option {
                            "px-4 py-2 text-sm font-medium border-b-2 border-neutral-900"
                        } else {
                            "px-4 py-2 text-sm text-neutral-500 hover:text-neutral-900"
                        },
                        onclick: move |_| tab.set(option),
                        "{option.label(strings)}"
                    }
                }
            }
            match tab() {
                Tab::Overview => rsx! {
                    div {
                        class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                        Panel { title: strings.this_month,
                            Overview { summary: summary.clone() }
                        }
                        Panel { title: strings.recent_transactions,
                            RecentTransactions { transactions: summary.recent_transactions.clone() }
                        }
                    }
                },
                Tab::Projects => rsx! {
                    Panel { title: strings.tab_projects,
                        ProjectsList { organization: organization() }
                    }
                },
                Tab::Budgets => rsx! {
                    Panel { title: strings.tab_budgets,
                        match &*budget_summary.read() {
                            None => rsx! {
                                div { class: "py-8 text-center text-neutral-600", "{strings.loading}" }
                            },
                            Some(Err(e)) => match error_message(e, strings) {
                                Some(message) => rsx! { ErrorNotice { message } },
                                None => rsx! {},
                            },
                            Some(Ok(summary)) => rsx! {
                                BudgetProgress { budgets: summary.budgets.clone() }
                            },
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: String, tone: &'static str) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-neutral-200 bg-white p-4",
            p { class: "text-xs uppercase tracking-wide text-neutral-500 m-0", "{title}" }
            p { class: "text-2xl font-semibold mt-1 mb-0 {tone}", "{value}" }
        }
    }
}

#[component]
fn Panel(title: &'static str, children: Element) -> Element {
    rsx! {
        section {
            class: "rounded-lg border border-neutral-200 bg-white p-4",
            h2 { class: "text-lg font-semibold mb-4", "{title}" }
            {children}
        }
    }
}
