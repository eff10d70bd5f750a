use api::StatusLine;
use dioxus::prelude::*;

use crate::auth::use_session;

/// The one-line outcome of the last panel operation.
#[component]
pub fn StatusBanner(status: Option<StatusLine>) -> Element {
    let mut session = use_session();
    let Some(status) = status else {
        return rsx! {};
    };
    let class = if status.is_error() {
        "status-message error"
    } else {
        "status-message success"
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            "{status.text}"
            if status.needs_sign_in() {
                " "
                Link {
                    to: "/admin/login",
                    onclick: move |_| session.write().logout(),
                    "Log in again"
                }
            }
        }
    }
}
