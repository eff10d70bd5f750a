//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the operator [`Session`], the [`ApiClient`] every
//! component talks to and the site configuration. They are provided through
//! context, so pages read them with [`use_session`], [`use_api`] and
//! [`use_site_config`] instead of reaching for globals.

use api::{ApiClient, ApiError, Credentials, StatusLine};
use dioxus::prelude::*;
use store::{Session, SiteConfig};

use crate::guard::end_refused_session;
use crate::repo::make_storage;

/// Get the current session.
/// Returns a signal that updates when the operator logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the shared API client.
pub fn use_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Current token, if any. Does not subscribe the caller.
pub fn current_token(session: Signal<Session>) -> Option<String> {
    session.peek().token().map(str::to_string)
}

/// End the session when `status` says the backend no longer accepts its
/// token. The admin guard then routes to the login page.
pub fn end_rejected_session(mut session: Signal<Session>, status: &StatusLine) {
    if status.needs_sign_in() && session.peek().is_authenticated() {
        end_refused_session(&mut session.write(), status);
    }
}

/// Provider component that restores the session and exposes the API client.
/// Wrap your app with this component to enable the admin console.
#[component]
pub fn SessionProvider(config: SiteConfig, children: Element) -> Element {
    let session = use_signal(|| {
        let session = Session::restore(make_storage());
        if session.is_authenticated() {
            tracing::info!("Restored operator session");
        }
        session
    });
    let client_config = config.clone();
    let api = use_signal(move || ApiClient::from_config(&client_config));

    use_context_provider(|| session);
    use_context_provider(|| api);
    use_context_provider(|| config.clone());

    rsx! {
        {children}
    }
}

/// Exchange `credentials` for a token and start the session.
pub async fn sign_in(
    client: Signal<ApiClient>,
    mut session: Signal<Session>,
    credentials: Credentials,
) -> Result<(), ApiError> {
    let client = client.peek().clone();
    let token = client.login(&credentials).await?;
    session.write().login(token);
    tracing::info!("Operator signed in as {}", credentials.username);
    Ok(())
}

/// Button to end the operator session.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.write().logout();
        tracing::info!("Operator signed out");
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
