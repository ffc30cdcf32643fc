pub mod error;
pub mod kv;
pub mod models;
pub mod session;
pub mod tickets;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use error::{AuthError, TicketError};
pub use kv::KeyValueStore;
pub use models::{Session, Ticket, TicketDraft, TicketStats, TicketStatus};
pub use session::{CredentialVerifier, DemoCredentials, SessionManager, SESSION_KEY};
pub use tickets::{stats, validate_draft, TicketStore, TICKETS_KEY};
