pub mod backend;
pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use backend::{StorageBackend, StoreError};
pub use config::{ApiConfig, AuthConfig, ClientConfig, DisplayConfig, Locale};
pub use models::{Session, SessionUser};
pub use session::{SessionStatus, SessionStore, TOKEN_KEY, USER_KEY};
