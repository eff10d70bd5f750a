//! Operator login page.

use api::Credentials;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{sign_in, use_api, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard
    if session.read().is_authenticated() {
        nav.replace(Route::Overview {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let credentials = Credentials::new(username().trim(), password());
            match sign_in(api, session, credentials).await {
                Ok(()) => {
                    nav.push(Route::Overview {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    error.set(Some(
                        e.describe("Invalid credentials", "Network error. Please try again."),
                    ));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: ui::ADMIN_CSS }
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { "Admin Login" }

                if let Some(err) = error() {
                    div { class: "error", "{err}" }
                }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",
                    div {
                        class: "form-group",
                        Label { html_for: "login-username", "Username" }
                        Input {
                            id: "login-username",
                            value: username(),
                            required: true,
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            r#type: "password",
                            value: password(),
                            required: true,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Need an account? "
                    Link { to: Route::Register {}, "Register here" }
                }
                Link { to: Route::Landing {}, "Back to site" }
            }
        }
    }
}
