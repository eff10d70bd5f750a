use dioxus::prelude::*;
use ui::{decide, use_session, GuardDecision};

use crate::Route;

/// Layout around every dashboard route. Re-checked on each navigation.
#[component]
pub fn AdminGuard() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let _route = use_route::<Route>();

    let decision = decide(&session.read());
    match decision {
        GuardDecision::Render => rsx! {
            Outlet::<Route> {}
        },
        GuardDecision::RedirectToLogin => {
            tracing::debug!("No operator session, redirecting to login");
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}
