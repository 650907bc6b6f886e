//! # Finance records
//!
//! Display-only projections of the backend's serializers. Derived fields
//! (`spent`, `remaining`, `percentage_used`, `progress`, …) are computed
//! server-side and never recomputed here.

use serde::{Deserialize, Serialize};

use super::de::{amount, optional_amount};

/// List endpoints answer either with a DRF page (`{ "results": [...] }`) or a
/// bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Page {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Page { results, .. } => results,
            ListResponse::Bare(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub balance: f64,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default = "yes")]
    pub is_active: bool,
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalBalance {
    #[serde(default, deserialize_with = "amount")]
    pub total_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Incoming,
    Outgoing,
    Transfer,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
    Failed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "amount")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<String>,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
}

impl Transaction {
    /// Date to display: the booking date, else the creation timestamp.
    pub fn display_date(&self) -> Option<&str> {
        self.transaction_date
            .as_deref()
            .or(self.timestamp.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(alias = "category", alias = "category__name", default)]
    pub name: Option<String>,
    #[serde(default, alias = "total", deserialize_with = "amount")]
    pub amount: f64,
}

/// `GET /transactions/summary/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    #[serde(default, deserialize_with = "amount")]
    pub income: f64,
    #[serde(default, deserialize_with = "amount")]
    pub expenses: f64,
    #[serde(default, deserialize_with = "amount")]
    pub balance: f64,
    #[serde(default)]
    pub top_expense_categories: Vec<CategoryTotal>,
    #[serde(default)]
    pub recent_transactions: Vec<Transaction>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub spent: f64,
    #[serde(default, deserialize_with = "amount")]
    pub remaining: f64,
    #[serde(default, deserialize_with = "amount")]
    pub percentage_used: f64,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
}

/// `GET /budgets/summary/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    #[serde(default, deserialize_with = "amount")]
    pub total_budget: f64,
    #[serde(default, deserialize_with = "amount")]
    pub total_spent: f64,
    #[serde(default, deserialize_with = "amount")]
    pub total_remaining: f64,
    #[serde(default, deserialize_with = "amount")]
    pub percentage_used: f64,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub org_type: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "amount")]
    pub budget: f64,
    #[serde(default, deserialize_with = "amount")]
    pub budget_spent: f64,
    #[serde(default, deserialize_with = "amount")]
    pub budget_remaining: f64,
    #[serde(default, deserialize_with = "amount")]
    pub budget_percentage: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub goal_type: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub target_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub current_amount: f64,
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "optional_amount")]
    pub progress: Option<f64>,
}

/// Body of `POST /goals/{id}/contribute/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub amount: f64,
    pub update_account: bool,
}

/// Recent transaction row of the dashboard overview (a flatter shape than
/// [`Transaction`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewTransaction {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "amount")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
}

/// `GET /dashboard/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    #[serde(default, deserialize_with = "amount")]
    pub total_balance: f64,
    #[serde(default)]
    pub accounts_count: u64,
    #[serde(default, deserialize_with = "amount")]
    pub monthly_income: f64,
    #[serde(default, deserialize_with = "amount")]
    pub monthly_expenses: f64,
    #[serde(default, deserialize_with = "amount")]
    pub monthly_net: f64,
    #[serde(default)]
    pub recent_transactions: Vec<OverviewTransaction>,
}
