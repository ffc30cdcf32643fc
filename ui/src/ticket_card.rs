use dioxus::prelude::*;
use store::{Ticket, TicketStatus};

fn badge_class(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "badge badge-open",
        TicketStatus::InProgress => "badge badge-in-progress",
        TicketStatus::Closed => "badge badge-closed",
    }
}

/// A single ticket in the management grid, with its status badge and
/// edit/delete actions.
#[component]
pub fn TicketCard(
    ticket: Ticket,
    on_edit: EventHandler<Ticket>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_ticket = ticket.clone();
    let delete_id = ticket.id.clone();
    let status_label = ticket.status.label();

    rsx! {
        div {
            class: "ticket-card",

            div {
                class: "ticket-card-header",
                h3 { "{ticket.title}" }
                span { class: badge_class(ticket.status), "{status_label}" }
            }

            if !ticket.description.is_empty() {
                p { class: "ticket-description", "{ticket.description}" }
            }

            div {
                class: "ticket-actions",
                button {
                    class: "btn btn-edit",
                    onclick: move |_| on_edit.call(edit_ticket.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
