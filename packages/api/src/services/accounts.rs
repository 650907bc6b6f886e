use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Account, AccountInput, AmountInput, ListResponse, TotalBalance};

pub async fn list(client: &ApiClient) -> Result<Vec<Account>, ApiError> {
    let accounts: ListResponse<Account> = client.get("/accounts/").fetch().await?;
    Ok(accounts.into_vec())
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Account, ApiError> {
    client.get(format!("/accounts/{id}/")).fetch().await
}

pub async fn create(client: &ApiClient, input: &AccountInput) -> Result<Account, ApiError> {
    client.post("/accounts/").json(input).fetch().await
}

pub async fn update(client: &ApiClient, id: i64, input: &AccountInput) -> Result<Account, ApiError> {
    client.put(format!("/accounts/{id}/")).json(input).fetch().await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(format!("/accounts/{id}/")).execute().await
}

/// Add `amount` to the balance. The backend rejects non-positive amounts.
pub async fn deposit(client: &ApiClient, id: i64, amount: f64) -> Result<Account, ApiError> {
    client
        .post(format!("/accounts/{id}/deposit/"))
        .json(&AmountInput { amount })
        .fetch()
        .await
}

/// Take `amount` from the balance; fails on insufficient funds.
pub async fn withdraw(client: &ApiClient, id: i64, amount: f64) -> Result<Account, ApiError> {
    client
        .post(format!("/accounts/{id}/withdraw/"))
        .json(&AmountInput { amount })
        .fetch()
        .await
}

pub async fn total_balance(client: &ApiClient) -> Result<f64, ApiError> {
    let total: TotalBalance = client.get("/accounts/total_balance/").fetch().await?;
    Ok(total.total_balance)
}

/// Account statistics. The shape is backend-defined and passed through.
pub async fn stats(client: &ApiClient) -> Result<Value, ApiError> {
    client.get("/accounts/stats/").fetch().await
}
