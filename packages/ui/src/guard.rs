//! Admin route guard.
//!
//! Authentication is derived synchronously from the session on every
//! navigation into the guarded subtree. The router layout that hosts the
//! admin pages asks [`decide`] and either renders its outlet or replaces the
//! location with the login page.
//!
//! A token the backend refuses (HTTP 401) is dropped by
//! [`end_refused_session`], so the next guard decision sends the operator to
//! the login page instead of back into the dashboard.

use api::StatusLine;
use store::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn of(session: &Session) -> Self {
        if session.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
}

pub fn decide(session: &Session) -> GuardDecision {
    match AuthState::of(session) {
        AuthState::Authenticated => GuardDecision::Render,
        AuthState::Unauthenticated => GuardDecision::RedirectToLogin,
    }
}

/// Log out when `status` reports that the session is no longer accepted.
/// Returns whether a session was ended.
pub fn end_refused_session(session: &mut Session, status: &StatusLine) -> bool {
    if !status.needs_sign_in() || !session.is_authenticated() {
        return false;
    }
    tracing::warn!("Session refused by the server: {}", status.text);
    session.logout();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, CollectionState, Message};
    use std::rc::Rc;
    use store::MemoryStorage;

    #[test]
    fn test_no_token_redirects() {
        let session = Session::restore(Rc::new(MemoryStorage::new()));
        assert_eq!(AuthState::of(&session), AuthState::Unauthenticated);
        assert_eq!(decide(&session), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_stored_token_renders() {
        let session = Session::restore(Rc::new(MemoryStorage::with_token("abc")));
        assert_eq!(decide(&session), GuardDecision::Render);
    }

    #[test]
    fn test_login_then_logout() {
        let mut session = Session::restore(Rc::new(MemoryStorage::new()));
        session.login("abc");
        assert_eq!(decide(&session), GuardDecision::Render);
        session.logout();
        assert_eq!(decide(&session), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_logout_survives_reload() {
        let storage = Rc::new(MemoryStorage::with_token("abc"));
        let mut session = Session::restore(storage.clone());
        session.logout();
        let reloaded = Session::restore(storage);
        assert_eq!(decide(&reloaded), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_refused_token_sends_operator_to_login() {
        let storage = Rc::new(MemoryStorage::with_token("expired"));
        let mut session = Session::restore(storage.clone());
        let mut inbox = CollectionState::<Message>::new();
        inbox.finish_load(Err(ApiError::Unauthorized("Token expired".to_string())));
        let status = inbox.status.clone().unwrap();

        assert!(end_refused_session(&mut session, &status));
        assert_eq!(decide(&session), GuardDecision::RedirectToLogin);
        assert_eq!(decide(&Session::restore(storage)), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_ordinary_failures_keep_the_session() {
        let mut session = Session::restore(Rc::new(MemoryStorage::with_token("abc")));
        let rejected = StatusLine::for_error(
            &ApiError::Rejected(Some("Unauthorized".to_string())),
            "Unauthorized",
        );
        assert!(!end_refused_session(&mut session, &rejected));
        assert!(!end_refused_session(&mut session, &StatusLine::success("Saved")));
        assert_eq!(decide(&session), GuardDecision::Render);
    }
}
