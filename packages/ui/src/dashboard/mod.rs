//! Financial dashboard components.
//!
//! [`FinancialDashboard`] owns the selected organization and passes it down;
//! each child fetches its own slice through [`api::services`]. Fetches live in
//! Dioxus resources, so they are dropped when the component unmounts.

mod budget_progress;
mod category_icon;
mod financial_dashboard;
mod notice;
mod organization_selector;
mod overview;
mod projects_list;
mod recent_transactions;

pub use budget_progress::BudgetProgress;
pub use category_icon::CategoryIconView;
pub use financial_dashboard::FinancialDashboard;
pub use notice::ErrorNotice;
pub use organization_selector::OrganizationSelector;
pub use overview::Overview;
pub use projects_list::ProjectsList;
pub use recent_transactions::RecentTransactions;
