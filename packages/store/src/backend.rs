//! Key/value storage abstraction shared by every session backend.
//!
//! Values are plain strings, the way browser `localStorage` holds them. The
//! [`crate::SessionStore`] is the only caller that should touch the session
//! keys; other code reads the session through it.

use thiserror::Error;

/// Errors raised when writing to a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend cannot be reached at all (no window, storage disabled).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused the write (quota exceeded, read-only directory).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// A stored value could not be (de)serialised.
    #[error("malformed value for `{key}`: {reason}")]
    Malformed { key: String, reason: String },
}

/// String key/value storage.
///
/// Reads never fail: an unreadable entry is reported as absent. Removal is
/// best-effort for the same reason.
pub trait StorageBackend: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str);
}
