//! Shared token-storage constructor for all platforms.
//!
//! Returns the [`store::TokenStorage`] the session is persisted in:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorage`]
//! - **Everything else**: process memory via [`store::MemoryStorage`]

use std::rc::Rc;

use store::TokenStorage;

/// Create the platform-appropriate token storage.
pub fn make_storage() -> Rc<dyn TokenStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Rc::new(store::MemoryStorage::new())
    }
}
