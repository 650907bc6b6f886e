//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`StorageBackend`] used on the **web platform**. It
//! is a zero-size handle that looks up `window.localStorage` on every call,
//! because `web_sys::Storage` is neither `Send` nor `Sync`.
//!
//! Reads swallow errors (private browsing, disabled storage) and report the
//! key as absent. Writes surface them as [`StoreError`] so the session store
//! can roll back a half-written session.

use crate::backend::{StorageBackend, StoreError};

/// `window.localStorage`-backed storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("Failed to remove {} from localStorage: {:?}", key, e);
            }
        }
    }
}
