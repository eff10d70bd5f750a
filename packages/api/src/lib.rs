//! # API crate: client side of the portfolio REST backend
//!
//! Everything the public site and the admin console need to talk to the
//! backend, with no UI code. The backend itself is an external service reached
//! at the base URL from `portfolio.toml`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: URL building, bearer tokens, envelope decoding |
//! | [`transport`] | [`Transport`] seam and the reqwest-backed [`HttpTransport`] |
//! | [`models`] | Resource records, form drafts, credentials, contact form |
//! | [`panel`] | CRUD panel state machine shared by every admin page |
//! | [`error`] | [`ApiError`] and [`FieldError`] |
//!
//! ## Endpoints
//!
//! - **Collections**: `projects`, `skills`, `services`, `youtube`, `education`,
//!   `contact` (list needs a token)
//! - **Singleton**: `about`
//! - **Auth**: `admin/login`, `admin/register`
//! - **Files**: `upload`

pub mod client;
pub mod error;
pub mod models;
pub mod panel;
pub mod transport;

pub use client::{decode_envelope, ApiClient, Envelope};
pub use error::{ApiError, FieldError};
pub use models::{
    AboutDraft, AboutProfile, ContactForm, Credentials, Draft, Editable, EntryKind, Message,
    Project, ProjectDraft, Resource, Service, ServiceDraft, Skill, SkillDraft, TimelineDraft,
    TimelineEntry, YoutubeDraft, YoutubeVideo, PROJECT_CATEGORIES, split_timeline,
};
pub use panel::{
    delete_pending, load_collection, submit_draft, CollectionState, EditorState, StateSlot,
    StatusKind, StatusLine, Submission,
};
pub use transport::{ApiRequest, Body, FilePart, HttpTransport, Method, RawResponse, Transport};
