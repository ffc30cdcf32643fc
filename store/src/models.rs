//! # Domain models for sessions and tickets
//!
//! Defines the records persisted by [`crate::SessionManager`] and
//! [`crate::TicketStore`]. All types are `Serialize + Deserialize`, matching
//! the two JSON entries in the key-value store:
//!
//! | Type | Persisted shape |
//! |------|-----------------|
//! | [`Session`] | `{ "email": "...", "name": "..." }` |
//! | [`Ticket`] | `{ "id": "...", "title": "...", "description"?: "...", "status": "open" \| "in_progress" \| "closed" }` |
//!
//! [`TicketDraft`] is the subset of ticket fields supplied by the user before
//! an id is assigned; its `status` is still a plain string so that an
//! out-of-enum value can be reported as a validation error instead of being
//! unrepresentable. [`TicketStats`] is derived, never persisted.

use serde::{Deserialize, Serialize};

/// The currently authenticated user, as persisted in the session entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier, used as the login key.
    pub email: String,
    /// Display name: the email's local part at signup, or a fixed name for
    /// the demo account.
    pub name: String,
}

/// Lifecycle status of a ticket. Serialized as `"open"`, `"in_progress"`,
/// or `"closed"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    /// Parse a wire value. Anything outside the three literals is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    /// Human-readable label for badges and dropdowns.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

/// A support-request record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique within the collection, assigned at creation, never changes.
    pub id: String,
    pub title: String,
    /// Optional on the wire; an empty description is omitted when serializing.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub status: TicketStatus,
}

/// User-supplied ticket fields before an id is assigned.
///
/// `status` is the raw form value; it is validated against the three-value
/// enum by [`crate::validate_draft`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub status: String,
}

/// Aggregate counts derived from a ticket collection.
///
/// `in_progress` tickets count toward `total` only — neither `open` nor
/// `resolved` includes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub resolved: usize,
}
