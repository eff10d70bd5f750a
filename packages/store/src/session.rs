//! # Operator session: the admin bearer token
//!
//! A [`Session`] holds at most one opaque token. Presence of the token is the
//! whole of "authenticated": there is no expiry tracking on the client, the
//! server reports stale tokens through failed requests.
//!
//! The token is mirrored into a [`TokenStorage`] so it survives a page reload.
//! The web build uses [`crate::LocalStorage`] (`localStorage["adminToken"]`),
//! everything else (tests, native builds) uses [`crate::MemoryStorage`].
//!
//! `Session` is a plain value. The UI keeps it in a Dioxus signal provided by
//! the session provider, so components receive it explicitly through context
//! and tests can build one over a fake storage.

use std::fmt;
use std::rc::Rc;

/// Storage key for the persisted token.
pub const TOKEN_KEY: &str = "adminToken";

/// Durable home of the session token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Authentication session backed by a [`TokenStorage`].
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn TokenStorage>,
    token: Option<String>,
}

impl Session {
    /// Build a session from whatever token the storage already holds.
    pub fn restore(storage: Rc<dyn TokenStorage>) -> Self {
        let token = storage.load().filter(|t| !t.trim().is_empty());
        Self { storage, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Persist `token` and make it the current credential.
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.storage.save(&token);
        self.token = Some(token);
    }

    /// Forget the token, both in memory and in storage.
    pub fn logout(&mut self) {
        self.storage.clear();
        self.token = None;
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn test_restore_empty_storage() {
        let session = Session::restore(Rc::new(MemoryStorage::new()));
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_login_then_logout() {
        let storage = MemoryStorage::new();
        let mut session = Session::restore(Rc::new(storage.clone()));

        session.login("abc123");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc123"));
        assert_eq!(storage.load().as_deref(), Some("abc123"));

        session.logout();
        assert!(!session.is_authenticated());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_token_survives_reload() {
        let storage = MemoryStorage::new();
        {
            let mut session = Session::restore(Rc::new(storage.clone()));
            session.login("persisted");
        }

        // A fresh session over the same storage acts like a page reload
        let reloaded = Session::restore(Rc::new(storage));
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.token(), Some("persisted"));
    }

    #[test]
    fn test_blank_stored_token_is_ignored() {
        let storage = MemoryStorage::with_token("   ");
        let session = Session::restore(Rc::new(storage));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_debug_hides_token() {
        let mut session = Session::restore(Rc::new(MemoryStorage::new()));
        session.login("secret-token");
        let printed = format!("{session:?}");
        assert!(!printed.contains("secret-token"));
    }
}
