//! # `localStorage` token storage: browser-side persistence
//!
//! [`LocalStorage`] is the [`TokenStorage`] used on the **web platform**. The
//! token lives under [`TOKEN_KEY`] in the page origin's `localStorage`, so it
//! survives reloads but stays scoped to one browser profile.
//!
//! Storage failures (private mode, quota, disabled storage) are logged and
//! otherwise ignored: the session then lives only as long as the tab.

use crate::session::{TokenStorage, TOKEN_KEY};

/// `window.localStorage`-backed TokenStorage.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

impl TokenStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(TOKEN_KEY, token) {
                tracing::warn!("Failed to persist session token: {e:?}");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(TOKEN_KEY) {
                tracing::warn!("Failed to clear session token: {e:?}");
            }
        }
    }
}
