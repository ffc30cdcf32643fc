use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            p { "© 2025 TicketFlow. All rights reserved." }
        }
    }
}
