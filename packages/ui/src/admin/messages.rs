use api::Message;
use dioxus::prelude::*;

use super::hooks::use_collection;
use super::shared::{delete_prompt, keyed};
use crate::components::StatusBanner;

/// Read-only inbox of contact form submissions.
#[component]
pub fn ManageMessages() -> Element {
    let collection = use_collection::<Message>();

    let state = collection.state.read();
    if state.loading {
        return rsx! { div { class: "loading-state", "Loading Messages..." } };
    }

    rsx! {
        div {
            class: "manage-section",
            h2 { "Contact Inquiries" }
            div {
                class: "admin-list messages-list",
                if state.load_failed && state.items.is_empty() {
                    div {
                        class: "error-retry-box",
                        p {
                            class: "error-text",
                            {state.status.as_ref().map(|s| s.text.clone()).unwrap_or_default()}
                        }
                        button {
                            class: "btn primary",
                            onclick: move |_| collection.retry(),
                            "Retry Connection"
                        }
                    }
                } else if state.items.is_empty() {
                    p { class: "empty-msg", "No messages received yet." }
                } else {
                    StatusBanner { status: state.status.clone() }
                    table {
                        thead {
                            tr {
                                th { "Date" }
                                th { "From" }
                                th { "Subject" }
                                th { "Message" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for (key, message) in keyed(&state.items) {
                                tr {
                                    key: "{key}",
                                    td { {message.received_on()} }
                                    td {
                                        strong { "{message.name}" }
                                        br {}
                                        span { class: "msg-email", "{message.email}" }
                                    }
                                    td { "{message.subject}" }
                                    td { class: "msg-preview", "{message.message}" }
                                    td {
                                        button {
                                            class: "delete-mini",
                                            onclick: {
                                                let id = key.clone();
                                                move |_| collection.request_delete(&id)
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            {delete_prompt(&state, collection, false)}
        }
    }
}
