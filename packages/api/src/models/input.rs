//! Request bodies and list filters for the finance endpoints.
//!
//! Optional fields are left out of the JSON when unset so updates only touch
//! what the caller provided.

use serde::{Deserialize, Serialize};

use super::de::amount;
use super::finance::{TransactionKind, TransactionStatus};
use crate::client::ApiRequest;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionInput {
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub account: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<String>,
    pub target_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_amount: Option<f64>,
    pub target_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of the deposit and withdraw actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmountInput {
    pub amount: f64,
}

/// Query parameters of `GET /transactions/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub account: Option<i64>,
    pub kind: Option<TransactionKind>,
    pub category: Option<i64>,
    pub status: Option<TransactionStatus>,
    pub organization: Option<i64>,
    pub project: Option<i64>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl TransactionFilter {
    pub(crate) fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("account", self.account)
            .query_opt("type", self.kind.map(kind_param))
            .query_opt("category", self.category)
            .query_opt("status", self.status.map(status_param))
            .query_opt("organization", self.organization)
            .query_opt("project", self.project)
            .query_opt("search", self.search.as_deref())
            .query_opt("ordering", self.ordering.as_deref())
    }
}

fn kind_param(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Incoming => "incoming",
        TransactionKind::Outgoing => "outgoing",
        TransactionKind::Transfer => "transfer",
        TransactionKind::Other => "other",
    }
}

fn status_param(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "completed",
        TransactionStatus::Pending => "pending",
        TransactionStatus::Failed => "failed",
        TransactionStatus::Other => "other",
    }
}

/// Query parameters of `GET /goals/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalFilter {
    pub goal_type: Option<String>,
    pub status: Option<String>,
    pub linked_account: Option<i64>,
}

impl GoalFilter {
    pub(crate) fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("goal_type", self.goal_type.as_deref())
            .query_opt("status", self.status.as_deref())
            .query_opt("linked_account", self.linked_account)
    }
}

/// `GET /goals/summary/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalSummary {
    #[serde(default)]
    pub pending_count: u64,
    #[serde(default)]
    pub in_progress_count: u64,
    #[serde(default)]
    pub completed_count: u64,
    #[serde(default, deserialize_with = "amount")]
    pub savings_total: f64,
    #[serde(default, deserialize_with = "amount")]
    pub investment_total: f64,
    #[serde(default, deserialize_with = "amount")]
    pub debt_total: f64,
    #[serde(default, deserialize_with = "amount")]
    pub target_total: f64,
    #[serde(default, deserialize_with = "amount")]
    pub current_total: f64,
    #[serde(default, deserialize_with = "amount")]
    pub overall_progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_update_omits_unset_fields() {
        let input = AccountInput {
            title: "Savings".to_string(),
            balance: Some(10.0),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"title": "Savings", "balance": 10.0})
        );
    }

    #[test]
    fn test_goal_summary_decimal_strings() {
        let summary: GoalSummary = serde_json::from_value(json!({
            "pending_count": 1, "in_progress_count": 2, "completed_count": 0,
            "savings_total": "1000.00", "investment_total": "0", "debt_total": "0",
            "target_total": "1000.00", "current_total": "250.00", "overall_progress": 25
        }))
        .unwrap();
        assert_eq!(summary.current_total, 250.0);
        assert_eq!(summary.overall_progress, 25.0);
    }
}
