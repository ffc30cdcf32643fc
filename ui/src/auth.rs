//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::Session;

/// Authentication state for the application.
///
/// The session itself lives here, in UI-owned state; the managers in the
/// `store` crate only mediate persistence. `loading` is true until the
/// startup restore has finished, so guards can wait before redirecting.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// On mount it restores any previously persisted session; a corrupt session
/// entry has already been purged by the time the restore resolves.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || async move {
        let user = crate::session_manager().restore().await;
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
