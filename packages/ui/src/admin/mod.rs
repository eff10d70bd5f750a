//! Admin console panels.
//!
//! Each collection page pairs [`use_collection`] with [`use_editor`] and
//! renders a form above a table. Messages is read-only and About edits the
//! singleton profile directly.

mod hooks;
pub use hooks::{use_collection, use_editor, CollectionHandle, EditorHandle};

mod shared;

mod about;
pub use about::ManageAbout;

mod education;
pub use education::ManageEducation;

mod messages;
pub use messages::ManageMessages;

mod overview;
pub use overview::{fetch_stats, DashboardStats, OverviewPanel};

mod projects;
pub use projects::ManageProjects;

mod services;
pub use services::ManageServices;

mod skills;
pub use skills::ManageSkills;

mod youtube;
pub use youtube::ManageYoutube;
