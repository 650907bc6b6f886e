use api::models::{Transaction, TransactionKind};
use dioxus::prelude::*;

use crate::auth::{use_client_config, use_strings};
use crate::format::{
    format_currency, relative_date, today, transaction_sign, transaction_status_badge,
    transaction_tone, CategoryIcon,
};
use crate::icons::{FaArrowDown, FaArrowUp, FaCartShopping, FaCreditCard, FaWallet};
use crate::Icon;

#[component]
pub fn RecentTransactions(transactions: Vec<Transaction>) -> Element {
    let strings = use_strings();
    let symbol = use_client_config().display.currency_symbol;
    let today = today();

    if transactions.is_empty() {
        return rsx! {
            div { class: "text-center py-8 text-neutral-600", "{strings.no_transactions}" }
        };
    }

    rsx! {
        div {
            class: "flex flex-col gap-1 max-h-[350px] overflow-y-auto pr-4",
            for tx in transactions {
                div {
                    key: "{tx.id}",
                    class: "flex items-center gap-3 p-2 rounded-lg hover:bg-neutral-50",
                    div {
                        class: "p-2 rounded-lg bg-neutral-100",
                        {transaction_icon(&tx)}
                    }
                    div {
                        class: "flex-1 flex items-center justify-between min-w-0",
                        div {
                            h3 { class: "text-sm font-medium m-0", "{tx.title}" }
                            div {
                                class: "flex items-center gap-2",
                                p {
                                    class: "text-xs text-neutral-600 m-0",
                                    {tx.display_date().map(|d| relative_date(d, today, strings)).unwrap_or_default()}
                                }
                                if let Some((label, tone)) = transaction_status_badge(tx.status, strings) {
                                    span { class: "text-[10px] px-1 rounded border {tone}", "{label}" }
                                }
                            }
                        }
                        div {
                            class: "flex items-center gap-1.5 pl-3 {transaction_tone(tx.kind)}",
                            span {
                                class: "text-sm font-medium",
                                "{transaction_sign(tx.kind)}{format_currency(tx.amount, &symbol)}"
                            }
                            if tx.kind == TransactionKind::Incoming {
                                Icon { icon: FaArrowDown, width: 12, height: 12 }
                            } else {
                                Icon { icon: FaArrowUp, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_icon(tx: &Transaction) -> Element {
    if tx.kind == TransactionKind::Incoming {
        return rsx! { Icon { icon: FaWallet, width: 16, height: 16 } };
    }
    match CategoryIcon::for_category(tx.category_name.as_deref()) {
        CategoryIcon::Food => rsx! { Icon { icon: FaCartShopping, width: 16, height: 16 } },
        _ => rsx! { Icon { icon: FaCreditCard, width: 16, height: 16 } },
    }
}
