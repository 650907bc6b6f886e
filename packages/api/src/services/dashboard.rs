use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::DashboardOverview;

pub async fn overview(client: &ApiClient) -> Result<DashboardOverview, ApiError> {
    client.get("/dashboard/").fetch().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{serve, test_client};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_overview() {
        let base = serve(Router::new().route(
            "/dashboard/",
            get(|| async {
                Json(json!({
                    "total_balance": "1500.00", "accounts_count": 2,
                    "monthly_income": "3000.00", "monthly_expenses": "1200.00", "monthly_net": "1800.00",
                    "recent_transactions": [
                        {"id": 1, "title": "Salary", "amount": "3000.00", "type": "incoming",
                         "date": "2024-05-01", "category": "Income", "account": "Checking"}
                    ]
                }))
            }),
        ))
        .await;
        let (client, _storage, _nav) = test_client(&base);

        let overview = overview(&client).await.unwrap();
        assert_eq!(overview.accounts_count, 2);
        assert_eq!(overview.monthly_net, 1800.0);
        assert_eq!(overview.recent_transactions[0].account.as_deref(), Some("Checking"));
    }
}
