use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ListResponse, Transaction, TransactionFilter, TransactionInput, TransactionSummary};

/// Reporting window of [`summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
            Period::All => "all",
        }
    }
}

pub async fn list(
    client: &ApiClient,
    filter: &TransactionFilter,
) -> Result<Vec<Transaction>, ApiError> {
    let transactions: ListResponse<Transaction> =
        filter.apply(client.get("/transactions/")).fetch().await?;
    Ok(transactions.into_vec())
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Transaction, ApiError> {
    client.get(format!("/transactions/{id}/")).fetch().await
}

pub async fn create(
    client: &ApiClient,
    input: &TransactionInput,
) -> Result<Transaction, ApiError> {
    client.post("/transactions/").json(input).fetch().await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    input: &TransactionInput,
) -> Result<Transaction, ApiError> {
    client.put(format!("/transactions/{id}/")).json(input).fetch().await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(format!("/transactions/{id}/")).execute().await
}

pub async fn recent(client: &ApiClient) -> Result<Vec<Transaction>, ApiError> {
    let transactions: ListResponse<Transaction> =
        client.get("/transactions/recent/").fetch().await?;
    Ok(transactions.into_vec())
}

/// Transaction statistics, passed through as the backend shapes them.
pub async fn stats(client: &ApiClient) -> Result<Value, ApiError> {
    client.get("/transactions/stats/").fetch().await
}

/// Income, expenses and top categories for `period`, optionally scoped to
/// one organization.
pub async fn summary(
    client: &ApiClient,
    period: Period,
    organization: Option<i64>,
) -> Result<TransactionSummary, ApiError> {
    client
        .get("/transactions/summary/")
        .query("period", period.as_str())
        .query_opt("organization", organization)
        .fetch()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionKind, TransactionStatus};
    use crate::testing::{serve, test_client};
    use axum::extract::RawQuery;
    use axum::routing::get as get_route;
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_summary_query() {
        let base = serve(Router::new().route(
            "/transactions/summary/",
            get_route(|RawQuery(q): RawQuery| async move {
                assert_eq!(q.as_deref(), Some("period=quarter&organization=3"));
                Json(json!({"income": 100, "expenses": "40.00", "balance": 60}))
            }),
        ))
        .await;
        let (client, _storage, _nav) = test_client(&base);

        let summary = summary(&client, Period::Quarter, Some(3)).await.unwrap();
        assert_eq!(summary.balance, 60.0);
        assert!(summary.top_expense_categories.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters() {
        let base = serve(Router::new().route(
            "/transactions/",
            get_route(|RawQuery(q): RawQuery| async move {
                assert_eq!(q.as_deref(), Some("type=outgoing&status=pending&search=rent"));
                Json(json!({"count": 1, "results": [
                    {"id": 4, "title": "Rent", "amount": "900.00", "type": "outgoing", "status": "pending"}
                ]}))
            }),
        ))
        .await;
        let (client, _storage, _nav) = test_client(&base);

        let filter = TransactionFilter {
            kind: Some(TransactionKind::Outgoing),
            status: Some(TransactionStatus::Pending),
            search: Some("rent".to_string()),
            ..Default::default()
        };
        let transactions = list(&client, &filter).await.unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, 900.0);
    }
}
