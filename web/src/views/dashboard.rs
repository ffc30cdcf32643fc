use dioxus::prelude::*;
use store::Ticket;
use ui::{use_auth, AuthState, Footer, StatCard};

use crate::Page;

#[component]
pub fn Dashboard() -> Element {
    let mut auth = use_auth();
    let mut page = use_context::<Signal<Page>>();
    let mut tickets = use_signal(Vec::<Ticket>::new);

    // Load the collection on mount; stats are derived, never stored.
    let _loader = use_resource(move || async move {
        tickets.set(ui::ticket_store().load().await);
    });

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

    let name = auth()
        .user
        .map(|u| u.name)
        .unwrap_or_default();
    let stats = store::stats(&tickets());

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",
                div {
                    h1 { "Dashboard" }
                    p { class: "page-subtitle", "Welcome back, {name}!" }
                }
                button {
                    class: "btn btn-danger",
                    onclick: handle_logout,
                    "Logout"
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total Tickets", value: stats.total }
                StatCard { label: "Open Tickets", value: stats.open, accent: "accent-open" }
                StatCard { label: "Resolved Tickets", value: stats.resolved, accent: "accent-resolved" }
            }

            div {
                class: "page-center",
                button {
                    class: "btn btn-primary btn-large",
                    onclick: move |_| page.set(Page::Tickets),
                    "Manage Tickets"
                }
            }

            Footer {}
        }
    }
}
