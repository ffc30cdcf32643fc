use dioxus::prelude::*;

/// Blocking confirmation shown before a ticket is deleted permanently.
/// There is no soft-delete or undo, so the destructive action needs a gate.
#[component]
pub fn ConfirmDialog(on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "overlay",
            div {
                class: "modal modal-narrow",
                h3 { "Confirm Delete" }
                p {
                    class: "confirm-text",
                    "Are you sure you want to delete this ticket? This action cannot be undone."
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                    button {
                        class: "btn btn-muted",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
