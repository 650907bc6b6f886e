use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::BudgetSummary;

/// Totals and per-budget usage, optionally restricted to one organization.
pub async fn summary(
    client: &ApiClient,
    organization: Option<i64>,
) -> Result<BudgetSummary, ApiError> {
    client
        .get("/budgets/summary/")
        .query_opt("organization", organization)
        .fetch()
        .await
}
