//! # HTTP client wrapper
//!
//! [`ApiClient`] is the only way the frontends talk to the REST backend. It
//! owns three cross-cutting behaviours so no call site has to repeat them:
//!
//! 1. **Base URL + JSON**: every path is resolved against
//!    [`store::ApiConfig::base_url`] and sent with `Content-Type: application/json`.
//! 2. **Bearer token**: when the [`SessionStore`] holds a session and the
//!    caller did not set `Authorization` itself (see
//!    [`ApiRequest::authorization`]), the request carries
//!    `Authorization: Token <token>`.
//! 3. **401 handling**: any 401 response clears the session and navigates to
//!    the login route, once per response. The call then fails with
//!    [`ApiError::Unauthorized`], carrying the response body. There is no
//!    retry and no distinction between an expired and a missing token.
//!    Sign-in calls opt out with [`ApiRequest::anonymous`]: the login page is
//!    already where a redirect would go.
//!
//! The client is `Clone` and cheap to pass around; clones share the HTTP
//! connection pool, the session store and the navigator.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::{ClientConfig, SessionStore};

use crate::error::{ApiError, ErrorBody};
use crate::navigator::Navigator;

pub use reqwest::Method;

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    login_route: String,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("session", &self.inner.session)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionStore, navigator: impl Navigator) -> Self {
        Self::with_navigator(config, session, Arc::new(navigator))
    }

    pub fn with_navigator(
        config: &ClientConfig,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: reqwest::Client::new(),
                base_url: config.api.base_url.trim_end_matches('/').to_string(),
                login_route: config.auth.login_route.clone(),
                session,
                navigator,
            }),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.inner.navigator.as_ref()
    }

    pub fn login_route(&self) -> &str {
        &self.inner.login_route
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute URL for an API path such as `/users/me/`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.inner.base_url, path)
        } else {
            format!("{}/{}", self.inner.base_url, path)
        }
    }

    pub fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest {
        ApiRequest {
            client: self.clone(),
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            authorization: None,
            anonymous: false,
            pending: None,
        }
    }

    pub fn get(&self, path: impl Into<String>) -> ApiRequest {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: impl Into<String>) -> ApiRequest {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: impl Into<String>) -> ApiRequest {
        self.request(Method::PUT, path)
    }

    pub fn delete(&self, path: impl Into<String>) -> ApiRequest {
        self.request(Method::DELETE, path)
    }

    /// Drop the session and leave for the login page.
    pub(crate) fn expire_session(&self) {
        self.inner.session.clear();
        self.inner.navigator.navigate(&self.inner.login_route);
    }
}

/// A request being assembled. Nothing is sent until [`ApiRequest::send`].
#[must_use = "requests do nothing unless sent"]
pub struct ApiRequest {
    client: ApiClient,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    authorization: Option<String>,
    anonymous: bool,
    pending: Option<ApiError>,
}

impl ApiRequest {
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when `value` is present.
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn json(mut self, body: &impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(e) => self.pending = Some(ApiError::Decode(e.to_string())),
        }
        self
    }

    /// Set `Authorization` explicitly; the stored token is then not attached.
    pub fn authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    /// Sign-in request: no stored token is attached, and a 401 means the
    /// credentials were rejected. The session is left alone and no
    /// navigation happens.
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    /// Send the request and return the successful response.
    pub async fn send(self) -> Result<reqwest::Response, ApiError> {
        if let Some(err) = self.pending {
            return Err(err);
        }

        let client = self.client;
        let inner = &client.inner;
        let mut builder = inner
            .http
            .request(self.method.clone(), client.url(&self.path))
            .header(CONTENT_TYPE, "application/json");

        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }

        match self.authorization {
            Some(value) => builder = builder.header(AUTHORIZATION, value),
            None if self.anonymous => {}
            None => {
                if let Some(token) = inner.session.token() {
                    builder = builder.header(AUTHORIZATION, format!("Token {token}"));
                }
            }
        }

        if let Some(body) = &self.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %self.method, path = %self.path, "API request");

        let response = builder.send().await.map_err(|e| {
            tracing::error!("No response for {} {}: {}", self.method, self.path, e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            let raw = response.text().await.unwrap_or_default();
            if self.anonymous {
                tracing::warn!("Credentials rejected on {}", self.path);
            } else {
                tracing::error!("Authentication error on {}, redirecting to login", self.path);
                client.expire_session();
            }
            return Err(ApiError::Unauthorized {
                body: ErrorBody::parse(&raw),
            });
        } else if status == StatusCode::FORBIDDEN {
            tracing::warn!("Access denied: {} {}", self.method, self.path);
        } else if status.is_server_error() {
            tracing::error!("Server error {} on {} {}", status, self.method, self.path);
        } else {
            tracing::debug!("Request {} {} failed with {}", self.method, self.path, status);
        }

        let raw = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status: status.as_u16(),
            body: ErrorBody::parse(&raw),
        })
    }

    /// Send and decode the JSON body.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let path = self.path.clone();
        let response = self.send().await?;
        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to decode response from {}: {}", path, e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Send and ignore the body (e.g. `204 No Content`).
    pub async fn execute(self) -> Result<(), ApiError> {
        self.send().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::RecordingNavigator;
    use crate::testing::{serve, test_client};
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use store::{MemoryStorage, Session, SessionUser, StorageBackend, TOKEN_KEY, USER_KEY};

    async fn echo_auth(headers: HeaderMap) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        Json(json!({"authorization": auth, "content_type": content_type}))
    }

    fn signed_in(storage: &MemoryStorage) {
        SessionStore::new(storage.clone())
            .save(&Session {
                token: "abc123".to_string(),
                user: SessionUser {
                    id: 1,
                    username: "alice".to_string(),
                    email: None,
                },
            })
            .unwrap();
    }

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::default().with_base_url("http://host/api/");
        let client = ApiClient::new(
            &config,
            SessionStore::new(MemoryStorage::new()),
            RecordingNavigator::new(),
        );
        assert_eq!(client.url("/users/me/"), "http://host/api/users/me/");
        assert_eq!(client.url("accounts/"), "http://host/api/accounts/");
    }

    #[tokio::test]
    async fn test_attaches_stored_token() {
        let base = serve(Router::new().route("/echo/", get(echo_auth))).await;
        let (client, storage, _nav) = test_client(&base);
        signed_in(&storage);

        let body: Value = client.get("/echo/").fetch().await.unwrap();
        assert_eq!(body["authorization"], "Token abc123");
        assert_eq!(body["content_type"], "application/json");
    }

    #[tokio::test]
    async fn test_no_header_without_session() {
        let base = serve(Router::new().route("/echo/", get(echo_auth))).await;
        let (client, _storage, _nav) = test_client(&base);

        let body: Value = client.get("/echo/").fetch().await.unwrap();
        assert!(body["authorization"].is_null());
    }

    #[tokio::test]
    async fn test_explicit_header_is_kept() {
        let base = serve(Router::new().route("/echo/", get(echo_auth))).await;
        let (client, storage, _nav) = test_client(&base);
        signed_in(&storage);

        let body: Value = client
            .get("/echo/")
            .authorization("Token override")
            .fetch()
            .await
            .unwrap();
        assert_eq!(body["authorization"], "Token override");
    }

    #[tokio::test]
    async fn test_401_clears_session_and_redirects_once() {
        let base = serve(Router::new().route(
            "/accounts/",
            get(|| async { (AxumStatus::UNAUTHORIZED, Json(json!({"detail": "Invalid token."}))) }),
        ))
        .await;
        let (client, storage, nav) = test_client(&base);
        signed_in(&storage);

        let err = client.get("/accounts/").execute().await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert_eq!(nav.visits(), vec!["/login".to_string()]);

        // A second 401 navigates once more, for that response only
        let _ = client.get("/accounts/").execute().await;
        assert_eq!(nav.visits().len(), 2);
    }

    #[tokio::test]
    async fn test_http_error_keeps_body() {
        let base = serve(Router::new().route(
            "/goals/",
            get(|| async { (AxumStatus::BAD_REQUEST, Json(json!({"title": ["This field is required."]}))) }),
        ))
        .await;
        let (client, storage, nav) = test_client(&base);
        signed_in(&storage);

        let err = client.get("/goals/").execute().await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.field_errors().get("title").map(String::as_str),
            Some("This field is required.")
        );
        // Non-401 errors leave the session alone
        assert!(storage.get(TOKEN_KEY).is_some());
        assert!(nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // Bind and drop a listener to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (client, _storage, nav) = test_client(&format!("http://{addr}"));
        let err = client.get("/users/me/").execute().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_query_parameters() {
        let base = serve(Router::new().route(
            "/q/",
            get(|axum::extract::RawQuery(q): axum::extract::RawQuery| async move {
                Json(json!({ "query": q }))
            }),
        ))
        .await;
        let (client, _storage, _nav) = test_client(&base);

        let body: Value = client
            .get("/q/")
            .query("period", "month")
            .query_opt("organization", None::<i64>)
            .query_opt("page", Some(2))
            .fetch()
            .await
            .unwrap();
        assert_eq!(body["query"], "period=month&page=2");
    }
}
