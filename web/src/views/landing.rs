use dioxus::prelude::*;
use ui::Footer;

use crate::Page;

#[component]
pub fn Landing() -> Element {
    let mut page = use_context::<Signal<Page>>();

    rsx! {
        div {
            class: "page",

            div {
                class: "hero",
                h1 { "TicketFlow" }
                p {
                    class: "hero-tagline",
                    "Streamline your support workflow with our powerful ticket management system. "
                    "Track, manage, and resolve tickets efficiently."
                }
                div {
                    class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| page.set(Page::Login),
                        "Login"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| page.set(Page::Signup),
                        "Get Started"
                    }
                }
            }

            div {
                class: "feature-grid",
                div {
                    class: "feature-card",
                    h3 { "Easy Ticket Management" }
                    p { "Create, update, and track tickets with an intuitive interface designed for efficiency." }
                }
                div {
                    class: "feature-card",
                    h3 { "Real-time Updates" }
                    p { "Stay informed with instant notifications and status updates on all your tickets." }
                }
                div {
                    class: "feature-card",
                    h3 { "Smart Prioritization" }
                    p { "Organize tickets by priority and status to focus on what matters most." }
                }
            }

            Footer {}
        }
    }
}
