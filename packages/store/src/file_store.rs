//! # Filesystem-backed storage
//!
//! [`FileStorage`] is the [`StorageBackend`] used by native builds (desktop
//! shells, headless tools, tests). Each key is one file holding the raw value.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── financeAppToken     # bearer token
//! └── financeAppUser      # JSON user projection
//! ```
//!
//! ## Platform data directories
//!
//! [`FileStorage::default_location`] resolves `<data_dir>/finance-client/`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/finance-client/` |
//! | Linux | `~/.local/share/finance-client/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\finance-client\` |

use std::path::{Path, PathBuf};

use crate::backend::{StorageBackend, StoreError};

const APP_DIR: &str = "finance-client";

/// Filesystem-backed storage for native targets.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Storage rooted in the platform data directory, or `./finance-client`
    /// when the platform has none.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '_' })
            .collect();
        self.base.join(name)
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let write_err = |e: std::io::Error| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };
        std::fs::create_dir_all(&self.base).map_err(write_err)?;
        std::fs::write(self.entry_path(key), value).map_err(write_err)
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, SessionUser};
    use crate::session::SessionStore;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert!(storage.get("financeAppToken").is_none());
        storage.set("financeAppToken", "abc").unwrap();
        assert_eq!(storage.get("financeAppToken").as_deref(), Some("abc"));

        storage.remove("financeAppToken");
        assert!(storage.get("financeAppToken").is_none());

        // Removing a missing key is a no-op
        storage.remove("financeAppToken");
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = SessionStore::new(FileStorage::new(dir.path().to_path_buf()));
        store
            .save(&Session {
                token: "T".to_string(),
                user: SessionUser {
                    id: 7,
                    username: "carol".to_string(),
                    email: None,
                },
            })
            .unwrap();

        // Re-open from the same directory
        let reopened = SessionStore::new(FileStorage::new(dir.path().to_path_buf()));
        let session = reopened.initialize().unwrap();
        assert_eq!(session.token, "T");
        assert_eq!(session.user.username, "carol");
    }

    #[test]
    fn test_keys_are_sanitised() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf());
        storage.set("../escape", "x").unwrap();
        assert!(dir.path().join(".._escape").exists());
        assert_eq!(storage.get("../escape").as_deref(), Some("x"));
    }
}
