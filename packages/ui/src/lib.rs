//! This crate contains all shared UI for the portfolio: the public landing
//! sections, the admin console panels and the hooks that bind them to the
//! [`api`] client.

use dioxus::prelude::*;

pub mod components;

mod timer;
pub use timer::{sleep, sleep_ms};

mod repo;
pub use repo::make_storage;

mod auth;
pub use auth::{
    current_token, end_rejected_session, sign_in, use_api, use_session, use_site_config,
    LogoutButton, SessionProvider,
};

mod guard;
pub use guard::{decide, end_refused_session, AuthState, GuardDecision};

mod dom;

mod latest;
pub use latest::Latest;

pub mod reveal;
pub use reveal::{use_reveal, use_reveal_bus, use_reveal_bus_provider, RevealBus, SectionId};

pub mod scroll;
pub use scroll::{use_scroll, use_scroll_provider, ScrollController};

pub mod typewriter;
pub use typewriter::{use_typewriter, Typewriter};

mod upload;
pub use upload::read_selected_file;

pub mod admin;

pub mod sections;

mod navbar;
pub use navbar::{NavState, Navbar};

mod preloader;
pub use preloader::{Preloader, PreloaderPhase};

pub const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");
pub const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");
pub(crate) const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
pub(crate) const PRELOADER_CSS: Asset = asset!("/assets/styling/preloader.css");
