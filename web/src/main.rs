use dioxus::prelude::*;

use ui::{use_auth, AuthProvider};
use views::{Dashboard, Landing, Login, Signup, Tickets};

mod views;

/// The screens of the application. There is no router: the visible page is a
/// single in-memory signal, provided through context so any view can navigate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Signup,
    Dashboard,
    Tickets,
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Shell {}
        }
    }
}

/// Page selection plus the navigation guard around the protected screens.
#[component]
fn Shell() -> Element {
    let auth = use_auth();
    let mut page = use_signal(|| Page::Landing);
    use_context_provider(|| page);

    // Once the session restore settles: authenticated users skip the landing
    // page, anonymous users are bounced off the protected pages.
    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        if state.user.is_some() && page() == Page::Landing {
            page.set(Page::Dashboard);
        } else if state.user.is_none() && matches!(page(), Page::Dashboard | Page::Tickets) {
            page.set(Page::Login);
        }
    });

    if auth().loading {
        return rsx! {
            div {
                class: "loading-screen",
                div { class: "spinner" }
                p { "Loading..." }
            }
        };
    }

    match page() {
        Page::Landing => rsx! { Landing {} },
        Page::Login => rsx! { Login {} },
        Page::Signup => rsx! { Signup {} },
        Page::Dashboard if auth().user.is_some() => rsx! { Dashboard {} },
        Page::Tickets if auth().user.is_some() => rsx! { Tickets {} },
        _ => rsx! { Login {} },
    }
}
