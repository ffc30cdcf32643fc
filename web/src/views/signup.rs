use dioxus::prelude::*;
use ui::{use_auth, AuthState, Toast, ToastMessage};

use crate::Page;

#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let mut page = use_context::<Signal<Page>>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut confirm_error = use_signal(|| Option::<String>::None);
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
        confirm_error.set(if confirm_password().is_empty() {
            Some("Please confirm your password".to_string())
        } else if password() != confirm_password() {
            Some("Passwords do not match".to_string())
        } else {
            None
        });
        if email_error().is_some() || password_error().is_some() || confirm_error().is_some() {
            return;
        }

        spawn(async move {
            match ui::session_manager()
                .signup(&email(), &password(), &confirm_password())
                .await
            {
                Ok(session) => {
                    auth.set(AuthState {
                        user: Some(session),
                        loading: false,
                    });
                    toast.set(Some(ToastMessage::success("Account created successfully!")));
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
                h2 { "Create Account" }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "field",
                        label { r#for: "email", "Email Address" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "Enter your email",
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
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(err) = password_error() {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div {
                        class: "field",
                        label { r#for: "confirm-password", "Confirm Password" }
                        input {
                            id: "confirm-password",
                            r#type: "password",
                            placeholder: "Re-enter your password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                        if let Some(err) = confirm_error() {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        "Sign Up"
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    button {
                        class: "link-button",
                        onclick: move |_| page.set(Page::Login),
                        "Login"
                    }
                }
            }
        }
    }
}
