use thiserror::Error;

/// Authentication failures surfaced to the login/signup forms.
///
/// Storage failures are never represented here: a corrupt session entry is
/// purged and treated as "not logged in" by [`crate::SessionManager::restore`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Login with an unrecognized email/password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Signup where the confirmation does not match the password.
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Ticket create/update failures. Validation errors are surfaced per-field by
/// the ticket form; `NotFound` indicates an update against an id that is no
/// longer in the collection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Status must be open, in_progress, or closed")]
    InvalidStatus,
    #[error("No ticket with id {0}")]
    NotFound(String),
}
