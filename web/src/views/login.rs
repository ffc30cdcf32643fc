use dioxus::prelude::*;
use ui::{use_auth, AuthState, Toast, ToastMessage};

use crate::Page;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut page = use_context::<Signal<Page>>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut toast = use_signal(|| Option::<ToastMessage>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        email_error.set(if email().is_empty() {
            Some("Email is required".to_string())
        } else {
            None
        });
        password_error.set(if password().is_empty() {
            Some("Password is required".to_string())
        } else {
            None
        });
        if email_error().is_some() || password_error().is_some() {
            return;
        }

        spawn(async move {
            match ui::session_manager().login(&email(), &password()).await {
                Ok(session) => {
                    auth.set(AuthState {
                        user: Some(session),
                        loading: false,
                    });
                    toast.set(Some(ToastMessage::success("Login successful!")));
                    super::toast_delay().await;
                    page.set(Page::Dashboard);
                }
                Err(err) => {
                    toast.set(Some(ToastMessage::error(err.to_string())));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            if let Some(t) = toast() {
                Toast { toast: t, on_close: move |_| toast.set(None) }
            }

            div {
                class: "auth-card",
                h2 { "Login to TicketFlow" }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        if let Some(err) = email_error() {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div {
                        class: "field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(err) = password_error() {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        "Login"
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    button {
                        class: "link-button",
                        onclick: move |_| page.set(Page::Signup),
                        "Sign up"
                    }
                }
            }
        }
    }
}
