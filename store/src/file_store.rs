//! # Filesystem-backed entry store
//!
//! [`FileStore`] is the [`KeyValueStore`] implementation used on native
//! platforms (desktop builds, local development). Each entry is one file named
//! after its key under a base directory, so `ticketapp_session` and
//! `ticketapp_tickets` become two independent JSON files.
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/ticketflow/` |
//! | Linux | `~/.local/share/ticketflow/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\ticketflow\` |
//!
//! All I/O errors are swallowed: a failed read behaves like a missing entry,
//! a failed write leaves the previous entry in place.

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    async fn set(&self, key: &str, value: String) {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionManager;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("ticketflow_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let manager = SessionManager::new(FileStore::new(dir.clone()));
        let session = manager
            .signup("pat@example.com", "secret", "secret")
            .await
            .unwrap();

        // Re-open from the same directory
        let manager2 = SessionManager::new(FileStore::new(dir.clone()));
        assert_eq!(manager2.restore().await, Some(session));

        manager2.logout().await;
        assert_eq!(manager2.restore().await, None);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
