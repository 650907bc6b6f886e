use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Contribution, Goal, GoalFilter, GoalInput, GoalSummary, ListResponse};

pub async fn list(client: &ApiClient, filter: &GoalFilter) -> Result<Vec<Goal>, ApiError> {
    let goals: ListResponse<Goal> = filter.apply(client.get("/goals/")).fetch().await?;
    Ok(goals.into_vec())
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Goal, ApiError> {
    client.get(format!("/goals/{id}/")).fetch().await
}

pub async fn create(client: &ApiClient, input: &GoalInput) -> Result<Goal, ApiError> {
    client.post("/goals/").json(input).fetch().await
}

pub async fn update(client: &ApiClient, id: i64, input: &GoalInput) -> Result<Goal, ApiError> {
    client.put(format!("/goals/{id}/")).json(input).fetch().await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(format!("/goals/{id}/")).execute().await
}

/// Add to the goal's saved amount. With `update_account` the linked account
/// is debited as well.
pub async fn contribute(
    client: &ApiClient,
    id: i64,
    amount: f64,
    update_account: bool,
) -> Result<Goal, ApiError> {
    client
        .post(format!("/goals/{id}/contribute/"))
        .json(&Contribution {
            amount,
            update_account,
        })
        .fetch()
        .await
}

pub async fn summary(client: &ApiClient) -> Result<GoalSummary, ApiError> {
    client.get("/goals/summary/").fetch().await
}
