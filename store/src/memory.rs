use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and ephemeral fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_entries_are_independent() {
        let store = MemoryStore::new();

        store.set("ticketapp_session", "{}".to_string()).await;
        store.set("ticketapp_tickets", "[]".to_string()).await;

        store.remove("ticketapp_session").await;

        assert!(store.get("ticketapp_session").await.is_none());
        assert_eq!(store.get("ticketapp_tickets").await.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_set_replaces_entry() {
        let store = MemoryStore::new();

        store.set("k", "old".to_string()).await;
        store.set("k", "new".to_string()).await;

        assert_eq!(store.get("k").await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("nope").await;
        assert!(store.get("nope").await.is_none());
    }
}
