use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Category, CategoryInput, ListResponse};

pub async fn list(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let categories: ListResponse<Category> = client.get("/categories/").fetch().await?;
    Ok(categories.into_vec())
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Category, ApiError> {
    client.get(format!("/categories/{id}/")).fetch().await
}

pub async fn create(client: &ApiClient, input: &CategoryInput) -> Result<Category, ApiError> {
    client.post("/categories/").json(input).fetch().await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    input: &CategoryInput,
) -> Result<Category, ApiError> {
    client.put(format!("/categories/{id}/")).json(input).fetch().await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(format!("/categories/{id}/")).execute().await
}
