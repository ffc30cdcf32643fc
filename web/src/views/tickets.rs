use dioxus::prelude::*;
use store::{Ticket, TicketDraft};
use ui::{
    use_auth, AuthState, ConfirmDialog, Footer, TicketCard, TicketModal, Toast, ToastMessage,
};

use crate::Page;

#[component]
pub fn Tickets() -> Element {
    let mut auth = use_auth();
    let mut page = use_context::<Signal<Page>>();
    let mut tickets = use_signal(Vec::<Ticket>::new);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Ticket>::None);
    let mut toast = use_signal(|| Option::<ToastMessage>::None);
    let mut delete_confirm = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        tickets.set(ui::ticket_store().load().await);
    });

    // The modal has already validated the draft; the store validates again at
    // its own boundary, so a failure here still surfaces as an error toast.
    let handle_save = move |draft: TicketDraft| {
        spawn(async move {
            let store = ui::ticket_store();
            let result = match editing() {
                Some(ticket) => store
                    .update(&ticket.id, &draft)
                    .await
                    .map(|_| "Ticket updated successfully!"),
                None => store
                    .create(&draft)
                    .await
                    .map(|_| "Ticket created successfully!"),
            };
            match result {
                Ok(message) => {
                    tickets.set(store.load().await);
                    toast.set(Some(ToastMessage::success(message)));
                    show_modal.set(false);
                    editing.set(None);
                }
                Err(err) => {
                    toast.set(Some(ToastMessage::error(err.to_string())));
                }
            }
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let store = ui::ticket_store();
            store.delete(&id).await;
            tickets.set(store.load().await);
            toast.set(Some(ToastMessage::success("Ticket deleted successfully!")));
            delete_confirm.set(None);
        });
    };

    let handle_logout = move |_| {
        spawn(async move {
            ui::session_manager().logout().await;
            auth.set(AuthState {
                user: None,
                loading: false,
            });
            page.set(Page::Landing);
        });
    };

    rsx! {
        div {
            class: "page",

            if let Some(t) = toast() {
                Toast { toast: t, on_close: move |_| toast.set(None) }
            }

            div {
                class: "page-header",
                div {
                    h1 { "Ticket Management" }
                    button {
                        class: "link-button",
                        onclick: move |_| page.set(Page::Dashboard),
                        "← Back to Dashboard"
                    }
                }
                div {
                    class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing.set(None);
                            show_modal.set(true);
                        },
                        "+ New Ticket"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }

            if tickets().is_empty() {
                div {
                    class: "empty-state",
                    p { "No tickets yet. Create your first ticket!" }
                }
            } else {
                div {
                    class: "ticket-grid",
                    for ticket in tickets() {
                        TicketCard {
                            key: "{ticket.id}",
                            ticket: ticket.clone(),
                            on_edit: move |t: Ticket| {
                                editing.set(Some(t));
                                show_modal.set(true);
                            },
                            on_delete: move |id: String| delete_confirm.set(Some(id)),
                        }
                    }
                }
            }

            if show_modal() {
                TicketModal {
                    ticket: editing(),
                    on_save: handle_save,
                    on_close: move |_| {
                        show_modal.set(false);
                        editing.set(None);
                    },
                }
            }

            if let Some(id) = delete_confirm() {
                ConfirmDialog {
                    on_confirm: move |_| handle_delete(id.clone()),
                    on_cancel: move |_| delete_confirm.set(None),
                }
            }

            Footer {}
        }
    }
}
