use api::models::TransactionSummary;
use dioxus::prelude::*;

use super::CategoryIconView;
use crate::auth::{use_client_config, use_strings};
use crate::format::{bar_width, format_currency};

/// Income against expenses for the period, then the largest expense
/// categories.
#[component]
pub fn Overview(summary: TransactionSummary) -> Element {
    let strings = use_strings();
    let symbol = use_client_config().display.currency_symbol;
    let scale = summary.income.max(summary.expenses);
    let width = |value: f64| if scale > 0.0 { bar_width(value / scale * 100.0) } else { 0.0 };

    let rows = [
        (strings.income, summary.income, "bg-emerald-500"),
        (strings.expenses, summary.expenses, "bg-red-500"),
    ];

    rsx! {
        div {
            class: "flex flex-col gap-6",
            div {
                class: "flex flex-col gap-3",
                for (label, value, bar) in rows {
                    div {
                        key: "{label}",
                        div {
                            class: "flex justify-between text-sm mb-1",
                            span { "{label}" }
                            span { class: "font-medium", "{format_currency(value, &symbol)}" }
                        }
                        div {
                            class: "h-3 w-full rounded bg-neutral-100 overflow-hidden",
                            div { class: "h-full {bar}", style: "width: {width(value)}%" }
                        }
                    }
                }
            }
            if !summary.top_expense_categories.is_empty() {
                div {
                    h3 { class: "text-sm font-semibold mb-2", "{strings.top_expense_categories}" }
                    ul {
                        class: "flex flex-col gap-2",
                        for (i, total) in summary.top_expense_categories.iter().cloned().enumerate() {
                            li {
                                key: "{i}",
                                class: "flex items-center justify-between text-sm",
                                div {
                                    class: "flex items-center gap-2",
                                    CategoryIconView { category: total.name.clone(), size: 14 }
                                    span { {total.name.clone().unwrap_or_else(|| strings.uncategorized.to_string())} }
                                }
                                span { "{format_currency(total.amount, &symbol)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
