//! Shared store constructors for all platforms.
//!
//! Returns managers backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`]
//! - **Desktop / native**: filesystem via [`store::FileStore`]
//! - **WASM without `web`**: in-memory, nothing survives a reload

use store::{KeyValueStore, SessionManager, TicketStore};

/// Create the platform-appropriate key-value store.
pub fn make_store() -> impl KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::IdbStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("ticketflow");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Session manager over the platform store.
pub fn session_manager() -> SessionManager<impl KeyValueStore> {
    SessionManager::new(make_store())
}

/// Ticket store over the platform store.
pub fn ticket_store() -> TicketStore<impl KeyValueStore> {
    TicketStore::new(make_store())
}
