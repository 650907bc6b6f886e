//! # Session store
//!
//! [`SessionStore`] owns every read and write of the two session keys
//! ([`TOKEN_KEY`] and [`USER_KEY`]). Keeping them behind one type is what lets
//! the pair invariant hold: a token is never stored without its user and vice
//! versa. A half-written slot found on read is cleared, not trusted.
//!
//! ## Status
//!
//! The store publishes a [`SessionStatus`] through a `tokio::sync::watch`
//! channel:
//!
//! | Status | Meaning |
//! |--------|---------|
//! | `Pending` | [`SessionStore::initialize`] has not run yet; nobody knows whether a session exists. |
//! | `Present(user)` | A complete session is stored. |
//! | `Absent` | No session is stored. |
//!
//! Status changes are published synchronously inside [`SessionStore::save`]
//! and [`SessionStore::clear`], so observers see the new state before the
//! caller's next statement (for example a redirect) runs.

use std::sync::Arc;

use tokio::sync::watch;

use crate::backend::{StorageBackend, StoreError};
use crate::models::{Session, SessionUser};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "financeAppToken";
/// Storage key holding the JSON user projection.
pub const USER_KEY: &str = "financeAppUser";

/// Observable session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Pending,
    Present(SessionUser),
    Absent,
}

impl SessionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionStatus::Pending)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionStatus::Present(user) => Some(user),
            _ => None,
        }
    }
}

/// Single owner of the persisted session.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
    status: Arc<watch::Sender<SessionStatus>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("status", &*self.status.borrow())
            .finish()
    }
}

impl SessionStore {
    pub fn new(backend: impl StorageBackend) -> Self {
        Self::from_shared(Arc::new(backend))
    }

    pub fn from_shared(backend: Arc<dyn StorageBackend>) -> Self {
        let (status, _) = watch::channel(SessionStatus::Pending);
        Self {
            backend,
            status: Arc::new(status),
        }
    }

    /// Read the stored slot and publish the initialization-complete status.
    pub fn initialize(&self) -> Option<Session> {
        let session = self.load();
        let next = match &session {
            Some(s) => SessionStatus::Present(s.user.clone()),
            None => SessionStatus::Absent,
        };
        tracing::debug!(authenticated = session.is_some(), "session store initialized");
        self.publish(next);
        session
    }

    /// The stored session, if both halves are present and well-formed.
    pub fn load(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY);
        let user_json = self.backend.get(USER_KEY);

        match (token, user_json) {
            (None, None) => None,
            (Some(token), Some(user_json)) => {
                match serde_json::from_str::<SessionUser>(&user_json) {
                    Ok(user) if !token.is_empty() => Some(Session { token, user }),
                    Ok(_) => {
                        tracing::warn!("Stored token is empty, discarding session");
                        self.repair();
                        None
                    }
                    Err(e) => {
                        tracing::warn!("Stored user is malformed, discarding session: {}", e);
                        self.repair();
                        None
                    }
                }
            }
            _ => {
                tracing::warn!("Found half-written session, discarding it");
                self.repair();
                None
            }
        }
    }

    /// Bearer token of the current session.
    pub fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }

    /// User projection of the current session.
    pub fn user(&self) -> Option<SessionUser> {
        self.load().map(|s| s.user)
    }

    /// Persist a session. Both keys are written or neither is.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let user_json = serde_json::to_string(&session.user).map_err(|e| StoreError::Malformed {
            key: USER_KEY.to_string(),
            reason: e.to_string(),
        })?;

        self.backend.set(USER_KEY, &user_json)?;
        if let Err(e) = self.backend.set(TOKEN_KEY, &session.token) {
            self.backend.remove(USER_KEY);
            self.backend.remove(TOKEN_KEY);
            self.publish_if_ready(SessionStatus::Absent);
            return Err(e);
        }

        tracing::info!(user = %session.user.username, "session stored");
        self.publish(SessionStatus::Present(session.user.clone()));
        Ok(())
    }

    /// Replace the stored user while keeping the token.
    ///
    /// Returns `Ok(false)` when no session exists; a user is never written on
    /// its own.
    pub fn update_user(&self, user: &SessionUser) -> Result<bool, StoreError> {
        let Some(session) = self.load() else {
            return Ok(false);
        };
        self.save(&Session {
            token: session.token,
            user: user.clone(),
        })?;
        Ok(true)
    }

    /// Remove both keys. Returns whether a complete session was stored.
    pub fn clear(&self) -> bool {
        let existed = self.load().is_some();
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
        if existed {
            tracing::info!("session cleared");
        }
        self.publish(SessionStatus::Absent);
        existed
    }

    pub fn status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }

    /// Receiver that observes every status change.
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }

    fn repair(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
        self.publish_if_ready(SessionStatus::Absent);
    }

    fn publish(&self, next: SessionStatus) {
        self.status.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    // Before `initialize` the status stays `Pending`; a repair during a plain
    // read must not mark the store as ready.
    fn publish_if_ready(&self, next: SessionStatus) {
        if !self.status.borrow().is_pending() {
            self.publish(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn alice() -> Session {
        Session {
            token: "T".to_string(),
            user: SessionUser {
                id: 1,
                username: "alice".to_string(),
                email: Some("a@x.com".to_string()),
            },
        }
    }

    /// Backend whose writes to one key always fail.
    #[derive(Clone, Default)]
    struct FailingKey {
        inner: MemoryStorage,
        failing: &'static str,
    }

    impl StorageBackend for FailingKey {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.failing {
                return Err(StoreError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_save_writes_both_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());

        store.save(&alice()).unwrap();

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("T"));
        let user: serde_json::Value =
            serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(
            user,
            serde_json::json!({"id": 1, "username": "alice", "email": "a@x.com"})
        );
        assert_eq!(store.load(), Some(alice()));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&alice()).unwrap();

        assert!(store.clear());
        assert!(storage.is_empty());
        assert_eq!(store.status(), SessionStatus::Absent);

        // Clearing twice is harmless
        assert!(!store.clear());
    }

    #[test]
    fn test_half_written_slot_is_repaired() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "orphan").unwrap();
        let store = SessionStore::new(storage.clone());

        assert!(store.token().is_none());
        assert!(storage.is_empty());

        storage.set(USER_KEY, r#"{"id":1,"username":"a"}"#).unwrap();
        assert!(store.initialize().is_none());
        assert!(storage.is_empty());
        assert_eq!(store.status(), SessionStatus::Absent);
    }

    #[test]
    fn test_malformed_user_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "T").unwrap();
        storage.set(USER_KEY, "not json").unwrap();
        let store = SessionStore::new(storage.clone());

        assert!(store.load().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_failed_token_write_rolls_back_user() {
        let backend = FailingKey {
            inner: MemoryStorage::new(),
            failing: TOKEN_KEY,
        };
        let store = SessionStore::new(backend.clone());

        assert!(store.save(&alice()).is_err());
        assert!(backend.inner.is_empty());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_update_user_requires_session() {
        let store = SessionStore::new(MemoryStorage::new());
        let user = alice().user;

        assert!(!store.update_user(&user).unwrap());
        assert!(store.load().is_none());

        store.save(&alice()).unwrap();
        let renamed = SessionUser {
            username: "alice2".to_string(),
            ..user
        };
        assert!(store.update_user(&renamed).unwrap());
        let session = store.load().unwrap();
        assert_eq!(session.token, "T");
        assert_eq!(session.user.username, "alice2");
    }

    #[test]
    fn test_status_lifecycle() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage);
        assert_eq!(store.status(), SessionStatus::Pending);

        // A plain read before initialization keeps the store pending
        assert!(store.load().is_none());
        assert_eq!(store.status(), SessionStatus::Pending);

        assert!(store.initialize().is_none());
        assert_eq!(store.status(), SessionStatus::Absent);

        store.save(&alice()).unwrap();
        assert_eq!(store.status(), SessionStatus::Present(alice().user));
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let store = SessionStore::new(MemoryStorage::new());
        let mut rx = store.subscribe();

        store.initialize();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), SessionStatus::Absent);

        store.save(&alice()).unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().user().is_some());

        store.clear();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), SessionStatus::Absent);
    }

    #[test]
    fn test_clones_share_status() {
        let store = SessionStore::new(MemoryStorage::new());
        let other = store.clone();
        store.save(&alice()).unwrap();
        assert!(other.status().user().is_some());
        other.clear();
        assert_eq!(store.status(), SessionStatus::Absent);
    }
}
