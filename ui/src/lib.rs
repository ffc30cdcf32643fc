//! This crate contains all shared UI for the workspace.

mod storage;
pub use storage::{make_store, session_manager, ticket_store};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod toast;
pub use toast::{Toast, ToastKind, ToastMessage};

mod ticket_modal;
pub use ticket_modal::TicketModal;

mod ticket_card;
pub use ticket_card::TicketCard;

mod stat_card;
pub use stat_card::StatCard;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod footer;
pub use footer::Footer;
