//! # IndexedDB entry store — browser-side persistence
//!
//! [`IdbStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It persists the session and ticket entries into the browser's
//! IndexedDB via the [`rexie`] crate (a Rust wrapper around the IndexedDB
//! API), so they survive page reloads within the same browser profile.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"ticketflow"` (version 1) with one
//! object store:
//!
//! | IndexedDB store | Key | Value |
//! |-----------------|-----|-------|
//! | `"entries"` | entry key (e.g. `"ticketapp_session"`) | serialized JSON string |
//!
//! ## Connection management
//!
//! `IdbStore` is a zero-size struct (`Clone`-friendly) that opens a fresh
//! [`Rexie`] connection on every operation. `Rexie` does not implement
//! `Clone`, and reopening is cheap because the browser caches IndexedDB
//! connections internally.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A corrupted or unavailable IndexedDB degrades to
//! "no saved data" rather than crashing; whether a *readable but unparsable*
//! entry is purged is decided above this layer, per entity.

use crate::kv::KeyValueStore;
use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

const DB_NAME: &str = "ticketflow";
const DB_VERSION: u32 = 1;
const ENTRIES_STORE: &str = "entries";

/// IndexedDB-backed KeyValueStore for the web platform.
#[derive(Clone, Default)]
pub struct IdbStore;

impl IdbStore {
    pub fn new() -> Self {
        Self
    }

    async fn open_db(&self) -> Result<Rexie, rexie::Error> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(ENTRIES_STORE))
            .build()
            .await
    }
}

impl KeyValueStore for IdbStore {
    async fn get(&self, key: &str) -> Option<String> {
        let db = self.open_db().await.ok()?;
        let tx = db
            .transaction(&[ENTRIES_STORE], TransactionMode::ReadOnly)
            .ok()?;
        let store = tx.store(ENTRIES_STORE).ok()?;

        let value = store.get(JsValue::from_str(key)).await.ok()?;

        let js_val = value?;
        serde_wasm_bindgen::from_value(js_val).ok()
    }

    async fn set(&self, key: &str, value: String) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[ENTRIES_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(ENTRIES_STORE) else {
            return;
        };

        let js_val = serde_wasm_bindgen::to_value(&value).unwrap_or(JsValue::NULL);
        let _ = store.put(&js_val, Some(&JsValue::from_str(key))).await;
        let _ = tx.done().await;
    }

    async fn remove(&self, key: &str) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[ENTRIES_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(ENTRIES_STORE) else {
            return;
        };

        let _ = store.delete(JsValue::from_str(key)).await;
        let _ = tx.done().await;
    }
}
