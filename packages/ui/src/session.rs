//! Platform wiring for the session controller.
//!
//! Picks the [`store::StorageBackend`] for the target:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorage`]
//! - **Desktop / Mobile** (native): files under `<data_dir>/finance-client/` via [`store::FileStorage`]
//! - anything else: in-memory, lost on exit

use std::sync::Arc;

use api::{ApiClient, BrowserNavigator, SessionController};
use store::{ClientConfig, SessionStore, StorageBackend};

/// Configuration for this platform: `finance.toml` next to the binary on
/// native targets, compiled-in values on the web.
pub fn load_config() -> ClientConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = std::path::Path::new(ClientConfig::filename());
        match ClientConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring unreadable {}: {}", path.display(), e);
                ClientConfig::from_env()
            }
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::from_env()
    }
}

/// Storage backend for this platform.
pub fn make_storage() -> Arc<dyn StorageBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::FileStorage::default_location())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryStorage::new())
    }
}

/// Session controller over the platform storage and browser navigation.
pub fn make_controller(config: &ClientConfig) -> SessionController {
    let session = SessionStore::from_shared(make_storage());
    let client = ApiClient::with_navigator(config, session, Arc::new(BrowserNavigator));
    SessionController::new(client, config)
}
