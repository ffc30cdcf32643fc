use dioxus::prelude::*;
use store::{validate_draft, Ticket, TicketDraft, TicketError};

/// Modal form for creating a ticket or editing an existing one.
///
/// The same validation the store applies at its boundary runs here first, so
/// the offending field can be highlighted before anything is submitted. A
/// valid draft is handed to `on_save`; the parent decides create vs. update.
#[component]
pub fn TicketModal(
    ticket: Option<Ticket>,
    on_save: EventHandler<TicketDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let editing = ticket.is_some();
    let initial_title = ticket.as_ref().map(|t| t.title.clone()).unwrap_or_default();
    let initial_description = ticket
        .as_ref()
        .map(|t| t.description.clone())
        .unwrap_or_default();
    let initial_status = ticket
        .as_ref()
        .map(|t| t.status.as_str().to_string())
        .unwrap_or_else(|| "open".to_string());

    let mut title = use_signal(move || initial_title);
    let mut description = use_signal(move || initial_description);
    let mut status = use_signal(move || initial_status);
    let mut title_error = use_signal(|| Option::<String>::None);
    let mut status_error = use_signal(|| Option::<String>::None);

    let handle_submit = move |_| {
        title_error.set(None);
        status_error.set(None);

        let draft = TicketDraft {
            title: title(),
            description: description(),
            status: status(),
        };
        match validate_draft(&draft) {
            Ok(_) => on_save.call(draft),
            Err(err @ TicketError::MissingTitle) => title_error.set(Some(err.to_string())),
            Err(err) => status_error.set(Some(err.to_string())),
        }
    };

    rsx! {
        div {
            class: "overlay",
            div {
                class: "modal",

                div {
                    class: "modal-header",
                    h2 { if editing { "Edit Ticket" } else { "Create Ticket" } }
                    button {
                        class: "modal-close",
                        aria_label: "close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div {
                    class: "field",
                    label { r#for: "ticket-title", "Title *" }
                    input {
                        id: "ticket-title",
                        r#type: "text",
                        placeholder: "Enter ticket title",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                    if let Some(err) = title_error() {
                        p { class: "field-error", "{err}" }
                    }
                }

                div {
                    class: "field",
                    label { r#for: "ticket-description", "Description" }
                    textarea {
                        id: "ticket-description",
                        rows: 4,
                        placeholder: "Describe the issue...",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }

                div {
                    class: "field",
                    label { r#for: "ticket-status", "Status *" }
                    select {
                        id: "ticket-status",
                        value: status(),
                        onchange: move |evt| status.set(evt.value()),
                        option { value: "open", "Open" }
                        option { value: "in_progress", "In Progress" }
                        option { value: "closed", "Closed" }
                    }
                    if let Some(err) = status_error() {
                        p { class: "field-error", "{err}" }
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: handle_submit,
                        if editing { "Update" } else { "Create" }
                    }
                    button {
                        class: "btn btn-muted",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
