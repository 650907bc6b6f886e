use api::models::Budget;
use dioxus::prelude::*;

use super::CategoryIconView;
use crate::auth::{use_client_config, use_strings};
use crate::format::{bar_width, format_currency, format_percentage, PeriodFilter, UsageTier};

/// Budget usage bars with a period filter.
#[component]
pub fn BudgetProgress(budgets: Vec<Budget>) -> Element {
    let strings = use_strings();
    let symbol = use_client_config().display.currency_symbol;
    let mut period = use_signal(PeriodFilter::default);

    let visible: Vec<Budget> = budgets
        .into_iter()
        .filter(|b| period().matches(&b.period))
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-4",
            div {
                class: "flex gap-1",
                for option in PeriodFilter::ALL {
                    button {
                        key: "{option.key()}",
                        class: if period() == option {
                            "px-3 py-1 text-xs rounded bg-neutral-900 text-white"
                        } else {
                            "px-3 py-1 text-xs rounded bg-neutral-100 text-neutral-700 hover:bg-neutral-200"
                        },
                        onclick: move |_| period.set(option),
                        "{option.label(strings)}"
                    }
                }
            }
            if visible.is_empty() {
                div { class: "text-center py-8 text-neutral-600", "{strings.no_budgets}" }
            }
            for budget in visible {
                div {
                    key: "{budget.id}",
                    class: "flex flex-col gap-2",
                    div {
                        class: "flex items-center justify-between",
                        div {
                            class: "flex items-center gap-2",
                            CategoryIconView { category: budget.category_name.clone(), size: 16 }
                            span { class: "font-medium text-sm", "{budget.title}" }
                        }
                        span {
                            class: "text-sm text-neutral-600",
                            "{format_currency(budget.spent, &symbol)} / {format_currency(budget.amount, &symbol)}"
                        }
                    }
                    div {
                        class: "h-2 w-full rounded-full bg-neutral-100 overflow-hidden",
                        div {
                            class: "h-full {UsageTier::from_percentage(budget.percentage_used).bar_class()}",
                            style: "width: {bar_width(budget.percentage_used)}%",
                        }
                    }
                    div {
                        class: "flex justify-between text-xs text-neutral-500",
                        span { "{format_percentage(budget.percentage_used)} {strings.used}" }
                        span { "{format_currency(budget.remaining, &symbol)} {strings.remaining}" }
                    }
                    if budget.organization_name.is_some() || budget.project_name.is_some() {
                        div {
                            class: "text-xs text-neutral-500",
                            if let Some(org) = &budget.organization_name {
                                span { "{org}" }
                            }
                            if let Some(project) = &budget.project_name {
                                span { " · {project}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
