//! # Ticket store — CRUD over the persisted collection
//!
//! [`TicketStore`] owns the ticket collection, persisted as one JSON array at
//! [`TICKETS_KEY`]. Every mutation is a full read-modify-write of that array;
//! there is no delta persistence and no concurrency control because the model
//! assumes a single tab mutating the store at a time (last write wins).
//!
//! | Method | Behavior |
//! |--------|----------|
//! | [`load`](TicketStore::load) | Absent or unparsable entry → empty collection. |
//! | [`create`](TicketStore::create) | Validate, assign a fresh uuid, append, persist. |
//! | [`update`](TicketStore::update) | Validate, overwrite all fields but `id`, persist. |
//! | [`delete`](TicketStore::delete) | Remove by id; a missing id is a silent no-op. |
//!
//! Unlike the session entry, a corrupt ticket entry is logged and kept in
//! place rather than purged; a later successful write replaces it. Keeping the
//! bytes around leaves the door open to manual recovery.
//!
//! [`stats`] is the pure derived computation behind the dashboard tiles.
//! `in_progress` tickets count toward `total` only — an intentional asymmetry
//! in the counts, not a bug.

use crate::error::TicketError;
use crate::kv::KeyValueStore;
use crate::models::{Ticket, TicketDraft, TicketStats, TicketStatus};

/// Storage key for the serialized ticket collection.
pub const TICKETS_KEY: &str = "ticketapp_tickets";

/// Check a draft against the create/update rules: a title that is non-empty
/// after trimming, and a status inside the three-value enum.
///
/// Shared between the store boundary and the ticket form, which uses the
/// error to highlight the offending field before submitting.
pub fn validate_draft(draft: &TicketDraft) -> Result<TicketStatus, TicketError> {
    if draft.title.trim().is_empty() {
        return Err(TicketError::MissingTitle);
    }
    TicketStatus::parse(&draft.status).ok_or(TicketError::InvalidStatus)
}

/// Derive aggregate counts from a ticket collection.
pub fn stats(tickets: &[Ticket]) -> TicketStats {
    TicketStats {
        total: tickets.len(),
        open: tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Open)
            .count(),
        resolved: tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Closed)
            .count(),
    }
}

/// Ticket CRUD over a [`KeyValueStore`].
pub struct TicketStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TicketStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the full collection. An absent entry is an empty collection; an
    /// unparsable one is logged and also treated as empty, without purging
    /// the entry.
    pub async fn load(&self) -> Vec<Ticket> {
        let Some(raw) = self.store.get(TICKETS_KEY).await else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(tickets) => tickets,
            Err(err) => {
                tracing::error!("Error loading tickets: {err}");
                Vec::new()
            }
        }
    }

    /// Validate the draft, assign a fresh id, append, and persist.
    pub async fn create(&self, draft: &TicketDraft) -> Result<Ticket, TicketError> {
        let status = validate_draft(draft)?;
        let ticket = Ticket {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status,
        };

        let mut tickets = self.load().await;
        tickets.push(ticket.clone());
        self.save(&tickets).await;
        Ok(ticket)
    }

    /// Replace every field of the matching ticket except its `id`.
    ///
    /// The update is a full overwrite, not a patch. Nothing is persisted when
    /// validation fails or the id is unknown.
    pub async fn update(&self, id: &str, draft: &TicketDraft) -> Result<Ticket, TicketError> {
        let status = validate_draft(draft)?;

        let mut tickets = self.load().await;
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TicketError::NotFound(id.to_string()))?;
        ticket.title = draft.title.clone();
        ticket.description = draft.description.clone();
        ticket.status = status;
        let updated = ticket.clone();

        self.save(&tickets).await;
        Ok(updated)
    }

    /// Remove the ticket with the matching id, if present, and persist the
    /// resulting collection. Deleting a non-existent id is not an error.
    pub async fn delete(&self, id: &str) {
        let mut tickets = self.load().await;
        tickets.retain(|t| t.id != id);
        self.save(&tickets).await;
    }

    async fn save(&self, tickets: &[Ticket]) {
        if let Ok(json) = serde_json::to_string(tickets) {
            self.store.set(TICKETS_KEY, json).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn draft(title: &str, status: &str) -> TicketDraft {
        TicketDraft {
            title: title.to_string(),
            description: String::new(),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_load() {
        let tickets = TicketStore::new(MemoryStore::new());

        let created = tickets.create(&draft("Printer on fire", "open")).await.unwrap();
        assert!(!created.id.is_empty());

        let loaded = tickets.load().await;
        assert_eq!(loaded, vec![created]);
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let tickets = TicketStore::new(MemoryStore::new());

        let a = tickets.create(&draft("First", "open")).await.unwrap();
        let b = tickets.create(&draft("Second", "open")).await.unwrap();

        assert_ne!(a.id, b.id);
        // Insertion order is preserved
        let loaded = tickets.load().await;
        assert_eq!(loaded[0].title, "First");
        assert_eq!(loaded[1].title, "Second");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let store = MemoryStore::new();
        let tickets = TicketStore::new(store.clone());

        let err = tickets.create(&draft("   ", "open")).await.unwrap_err();
        assert_eq!(err, TicketError::MissingTitle);
        // Nothing persisted on a failed create
        assert!(store.get(TICKETS_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_status() {
        let tickets = TicketStore::new(MemoryStore::new());

        let err = tickets.create(&draft("Valid title", "reopened")).await.unwrap_err();
        assert_eq!(err, TicketError::InvalidStatus);
        assert!(tickets.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_overwrites_fields() {
        let tickets = TicketStore::new(MemoryStore::new());

        let created = tickets
            .create(&TicketDraft {
                title: "Login broken".to_string(),
                description: "500 on submit".to_string(),
                status: "open".to_string(),
            })
            .await
            .unwrap();

        let updated = tickets
            .update(&created.id, &draft("Login fixed", "closed"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Login fixed");
        // Full overwrite: the old description is replaced, not merged
        assert_eq!(updated.description, "");
        assert_eq!(updated.status, TicketStatus::Closed);
        assert_eq!(tickets.load().await, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let tickets = TicketStore::new(MemoryStore::new());
        tickets.create(&draft("Only ticket", "open")).await.unwrap();

        let err = tickets.update("missing", &draft("New", "open")).await.unwrap_err();
        assert_eq!(err, TicketError::NotFound("missing".to_string()));
        assert_eq!(tickets.load().await[0].title, "Only ticket");
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let tickets = TicketStore::new(MemoryStore::new());
        let created = tickets.create(&draft("Keep me", "open")).await.unwrap();

        tickets.delete("not-an-id").await;

        assert_eq!(tickets.load().await, vec![created]);
    }

    #[tokio::test]
    async fn test_full_lifecycle_ends_empty() {
        let tickets = TicketStore::new(MemoryStore::new());
        assert!(tickets.load().await.is_empty());

        let created = tickets.create(&draft("Round trip", "open")).await.unwrap();
        assert_eq!(tickets.load().await.len(), 1);

        tickets
            .update(&created.id, &draft("Round trip", "in_progress"))
            .await
            .unwrap();
        assert_eq!(tickets.load().await[0].status, TicketStatus::InProgress);

        tickets.delete(&created.id).await;
        assert!(tickets.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_entry_loads_empty_without_purge() {
        let store = MemoryStore::new();
        store.set(TICKETS_KEY, "[{broken".to_string()).await;

        let tickets = TicketStore::new(store.clone());
        assert!(tickets.load().await.is_empty());

        // The bad entry stays in place until the next successful write.
        assert_eq!(store.get(TICKETS_KEY).await.as_deref(), Some("[{broken"));

        tickets.create(&draft("Fresh start", "open")).await.unwrap();
        assert_ne!(store.get(TICKETS_KEY).await.as_deref(), Some("[{broken"));
        assert_eq!(tickets.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_description_is_optional_on_the_wire() {
        let store = MemoryStore::new();
        store
            .set(
                TICKETS_KEY,
                r#"[{"id":"1","title":"Legacy","status":"open"}]"#.to_string(),
            )
            .await;

        let tickets = TicketStore::new(store);
        let loaded = tickets.load().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description, "");
    }

    #[test]
    fn test_stats_ignore_in_progress_in_both_buckets() {
        let mk = |status| Ticket {
            id: "x".to_string(),
            title: "t".to_string(),
            description: String::new(),
            status,
        };
        let tickets = vec![
            mk(TicketStatus::Open),
            mk(TicketStatus::Open),
            mk(TicketStatus::InProgress),
            mk(TicketStatus::Closed),
        ];

        let s = stats(&tickets);
        assert_eq!(s.total, 4);
        assert_eq!(s.open, 2);
        assert_eq!(s.resolved, 1);
        // in_progress is counted in total only
        assert_eq!(s.total - s.open - s.resolved, 1);
    }

    #[test]
    fn test_stats_of_empty_collection() {
        assert_eq!(stats(&[]), TicketStats::default());
    }

    #[test]
    fn test_validate_draft_accepts_all_statuses() {
        for status in ["open", "in_progress", "closed"] {
            assert!(validate_draft(&draft("ok", status)).is_ok());
        }
        assert_eq!(
            validate_draft(&draft("ok", "Open")),
            Err(TicketError::InvalidStatus)
        );
    }
}
