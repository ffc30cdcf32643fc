//! # Key-value persistence boundary
//!
//! TicketFlow keeps all durable state in two independent entries of a
//! string-keyed store: the serialized session ([`crate::SESSION_KEY`]) and the
//! serialized ticket collection ([`crate::TICKETS_KEY`]). [`KeyValueStore`] is
//! the only seam between the managers and the host platform, so the same
//! session/ticket logic runs against IndexedDB in the browser, flat files on
//! desktop, or a hash map in tests.
//!
//! There are no transactions across entries: a write to one key is independent
//! of the other, and every write replaces the entry wholesale. Backends never
//! surface storage failures; a failed read degrades to "no data".

/// Async trait for reading and writing serialized entries.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = ()>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ()>;
}
