//! # Session manager — the authenticated-user lifecycle
//!
//! [`SessionManager`] owns the four transitions of the two-state session
//! machine (`Anonymous` ⇄ `Authenticated`):
//!
//! | Method | Transition |
//! |--------|------------|
//! | [`restore`](SessionManager::restore) | Initial state at startup, from the persisted entry. |
//! | [`login`](SessionManager::login) | `Anonymous → Authenticated` on a verified credential pair. |
//! | [`signup`](SessionManager::signup) | `Anonymous → Authenticated`; always succeeds when passwords match. |
//! | [`logout`](SessionManager::logout) | `Authenticated → Anonymous`; idempotent. |
//!
//! The manager holds no session itself — the in-memory `Option<Session>` is
//! owned by the caller (the UI auth signal), and the manager only mediates
//! access to the persisted entry at [`SESSION_KEY`]. Failed login/signup
//! return an error without touching storage.
//!
//! Credential checking goes through the [`CredentialVerifier`] seam so a real
//! backend can replace [`DemoCredentials`] without touching the state-machine
//! logic. The demo verifier accepts exactly one hardcoded account and is
//! intentionally a stub.
//!
//! This is the sole place session corruption is handled: an entry that fails
//! to deserialize is purged and treated as absent, never reported as an error.

use crate::error::AuthError;
use crate::kv::KeyValueStore;
use crate::models::Session;

/// Storage key for the serialized session entry.
pub const SESSION_KEY: &str = "ticketapp_session";

/// Pluggable credential check. Returns the user's display name on success.
pub trait CredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> Option<String>;
}

/// The hardcoded demo account: `demo@user.com` / `password123`.
///
/// No hashing, no rate limiting, no lockout. There is no real authentication
/// backend in TicketFlow; any other credential pair fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoCredentials;

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, email: &str, password: &str) -> Option<String> {
        if email == "demo@user.com" && password == "password123" {
            Some("Demo User".to_string())
        } else {
            None
        }
    }
}

/// Session lifecycle operations over a [`KeyValueStore`].
pub struct SessionManager<S: KeyValueStore, C: CredentialVerifier = DemoCredentials> {
    store: S,
    credentials: C,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self::with_credentials(store, DemoCredentials)
    }
}

impl<S: KeyValueStore, C: CredentialVerifier> SessionManager<S, C> {
    pub fn with_credentials(store: S, credentials: C) -> Self {
        Self { store, credentials }
    }

    /// Restore a previously persisted session at startup.
    ///
    /// Returns `None` when the entry is absent. A present-but-unparsable entry
    /// is purged and also yields `None`; parse errors never propagate.
    pub async fn restore(&self) -> Option<Session> {
        let raw = self.store.get(SESSION_KEY).await?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(_) => {
                self.store.remove(SESSION_KEY).await;
                None
            }
        }
    }

    /// Authenticate against the credential verifier and persist the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let name = self
            .credentials
            .verify(email, password)
            .ok_or(AuthError::InvalidCredentials)?;
        let session = Session {
            email: email.to_string(),
            name,
        };
        self.persist(&session).await;
        Ok(session)
    }

    /// Create an account and persist the session.
    ///
    /// Fails only on a password/confirmation mismatch; there is no email
    /// uniqueness or password strength check. The display name is the email's
    /// local part (substring before the first `@`). Silently overwrites any
    /// existing session.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Session, AuthError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        let name = email.split('@').next().unwrap_or(email).to_string();
        let session = Session {
            email: email.to_string(),
            name,
        };
        self.persist(&session).await;
        Ok(session)
    }

    /// Delete the persisted session entry. A no-op when no session exists.
    pub async fn logout(&self) {
        self.store.remove(SESSION_KEY).await;
    }

    async fn persist(&self, session: &Session) {
        if let Ok(json) = serde_json::to_string(session) {
            self.store.set(SESSION_KEY, json).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[tokio::test]
    async fn test_demo_login_succeeds() {
        let manager = SessionManager::new(MemoryStore::new());

        let session = manager.login("demo@user.com", "password123").await.unwrap();
        assert_eq!(session.email, "demo@user.com");
        assert_eq!(session.name, "Demo User");

        // Persisted and restorable
        assert_eq!(manager.restore().await, Some(session));
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_credentials() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(store.clone());

        let err = manager.login("demo@user.com", "wrong").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        let err = manager.login("who@else.com", "password123").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);

        // Failed login leaves storage untouched
        assert!(store.get(SESSION_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_signup_derives_name_from_email() {
        let manager = SessionManager::new(MemoryStore::new());

        let session = manager
            .signup("jordan@example.com", "hunter2", "hunter2")
            .await
            .unwrap();
        assert_eq!(session.name, "jordan");
        assert_eq!(manager.restore().await, Some(session));
    }

    #[tokio::test]
    async fn test_signup_mismatch_does_not_persist() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(store.clone());

        let err = manager
            .signup("jordan@example.com", "hunter2", "hunter3")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::PasswordMismatch);
        assert!(store.get(SESSION_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_signup_overwrites_existing_session() {
        let manager = SessionManager::new(MemoryStore::new());

        manager.login("demo@user.com", "password123").await.unwrap();
        let session = manager
            .signup("new@example.com", "pw", "pw")
            .await
            .unwrap();

        assert_eq!(manager.restore().await, Some(session));
    }

    #[tokio::test]
    async fn test_restore_purges_corrupt_entry() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json".to_string()).await;

        let manager = SessionManager::new(store.clone());
        assert_eq!(manager.restore().await, None);

        // The corrupt entry is gone; a second restore sees nothing at all.
        assert!(store.get(SESSION_KEY).await.is_none());
        assert_eq!(manager.restore().await, None);
    }

    #[tokio::test]
    async fn test_restore_without_entry() {
        let manager = SessionManager::new(MemoryStore::new());
        assert_eq!(manager.restore().await, None);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(store.clone());

        manager.login("demo@user.com", "password123").await.unwrap();
        manager.logout().await;
        assert!(store.get(SESSION_KEY).await.is_none());

        // Logging out again with no active session is a no-op.
        manager.logout().await;
        assert!(store.get(SESSION_KEY).await.is_none());
    }

    struct AlwaysYes;

    impl CredentialVerifier for AlwaysYes {
        fn verify(&self, _email: &str, _password: &str) -> Option<String> {
            Some("Anyone".to_string())
        }
    }

    #[tokio::test]
    async fn test_custom_verifier_is_pluggable() {
        let manager = SessionManager::with_credentials(MemoryStore::new(), AlwaysYes);

        let session = manager.login("a@b.c", "whatever").await.unwrap();
        assert_eq!(session.name, "Anyone");
    }
}
