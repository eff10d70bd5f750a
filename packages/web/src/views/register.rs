//! Operator registration page.

use api::Credentials;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{sleep_ms, use_api};

use crate::Route;

const REDIRECT_MS: u64 = 2000;

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            success.set(None);
            loading.set(true);

            let credentials = Credentials::new(username().trim(), password());
            let client = api.peek().clone();
            let result = client.register(&credentials).await;
            loading.set(false);

            match result {
                Ok(()) => {
                    tracing::info!("Registered operator {}", credentials.username);
                    success.set(Some(
                        "Registration successful! Redirecting to login...".to_string(),
                    ));
                    sleep_ms(REDIRECT_MS).await;
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {e}");
                    error.set(Some(
                        e.describe("Registration failed", "Network error. Please try again."),
                    ));
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
                h2 { "Admin Register" }

                if let Some(err) = error() {
                    div { class: "error", "{err}" }
                }
                if let Some(msg) = success() {
                    div { class: "success", "{msg}" }
                }

                form {
                    onsubmit: handle_register,
                    class: "auth-form",
                    div {
                        class: "form-group",
                        Label { html_for: "register-username", "Username" }
                        Input {
                            id: "register-username",
                            value: username(),
                            required: true,
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        Label { html_for: "register-password", "Password" }
                        Input {
                            id: "register-password",
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
                        if loading() { "Registering..." } else { "Register" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login here" }
                }
            }
        }
    }
}
