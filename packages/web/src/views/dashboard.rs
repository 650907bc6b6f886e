use dioxus::prelude::*;
use ui::FinancialDashboard;

use super::NavBar;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        NavBar {}
        main {
            class: "max-w-6xl mx-auto",
            FinancialDashboard {}
        }
    }
}
