//! In-process fake backend for tests.

use axum::Router;
use store::{ClientConfig, MemoryStorage, SessionStore};

use crate::client::ApiClient;
use crate::navigator::RecordingNavigator;

/// Serve `router` on an ephemeral local port and return its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub(crate) fn test_client(base_url: &str) -> (ApiClient, MemoryStorage, RecordingNavigator) {
    let storage = MemoryStorage::new();
    let navigator = RecordingNavigator::new();
    let config = ClientConfig::default().with_base_url(base_url);
    let client = ApiClient::new(&config, SessionStore::new(storage.clone()), navigator.clone());
    (client, storage, navigator)
}
