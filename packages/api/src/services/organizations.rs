use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ListResponse, Organization, Project};

/// Organizations the current user belongs to.
pub async fn list(client: &ApiClient) -> Result<Vec<Organization>, ApiError> {
    let organizations: ListResponse<Organization> =
        client.get("/organizations/organizations/").fetch().await?;
    Ok(organizations.into_vec())
}

/// Projects, optionally restricted to one organization.
pub async fn projects(
    client: &ApiClient,
    organization: Option<i64>,
) -> Result<Vec<Project>, ApiError> {
    let projects: ListResponse<Project> = client
        .get("/organizations/projects/")
        .query_opt("organization", organization)
        .fetch()
        .await?;
    Ok(projects.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{serve, test_client};
    use axum::extract::RawQuery;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_projects_scoped_to_organization() {
        let base = serve(Router::new().route(
            "/organizations/projects/",
            get(|RawQuery(q): RawQuery| async move {
                let items = if q.as_deref() == Some("organization=5") {
                    json!([{"id": 1, "name": "Launch", "status": "active", "budget": "1000.00"}])
                } else {
                    json!([])
                };
                Json(items)
            }),
        ))
        .await;
        let (client, _storage, _nav) = test_client(&base);

        let scoped = projects(&client, Some(5)).await.unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].budget, 1000.0);
        assert!(projects(&client, None).await.unwrap().is_empty());
    }
}
