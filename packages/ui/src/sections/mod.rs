//! Public landing-page sections.
//!
//! Each section fetches its own data once on mount (no shared cache), never
//! retries, and renders fallback copy when the fetch fails. Visibility comes
//! from [`crate::reveal::use_reveal`].

use api::{AboutProfile, Resource};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::reveal::{reveal_class, SectionId};

mod home;
pub use home::Home;

mod about;
pub use about::About;

mod education;
pub use education::Education;

mod skills;
pub use skills::{marquee_track, Skills};

mod my_work;
pub use my_work::{filter_projects, MyWork, WORK_FILTERS};

mod youtube;
pub use youtube::Youtube;

mod services;
pub use services::Services;

mod contact;
pub use contact::{Contact, ContactCycle, ContactStatus};

/// Load collection `R` once. Failures leave the list empty.
fn use_public_list<R: Resource>() -> Signal<Vec<R>> {
    let api = use_api();
    let mut items = use_signal(Vec::new);

    use_future(move || async move {
        let client = api.peek().clone();
        match client.list::<R>(None).await {
            Ok(list) => items.set(list),
            Err(e) => tracing::warn!("Error fetching {}: {e}", R::PLURAL),
        }
    });

    items
}

/// Load the About profile once. `None` until (and unless) it arrives.
fn use_about_profile() -> Signal<Option<AboutProfile>> {
    let api = use_api();
    let mut profile = use_signal(|| None);

    use_future(move || async move {
        let client = api.peek().clone();
        match client.fetch_about().await {
            Ok(found) => profile.set(found),
            Err(e) => tracing::warn!("Error fetching about data: {e}"),
        }
    });

    profile
}

/// The reveal wrapper and `<section>` element shared by every section.
#[component]
fn SectionFrame(section: SectionId, class: String, revealed: bool, children: Element) -> Element {
    let open = revealed;
    let wrapper = if open {
        "iris-reveal-wrapper open"
    } else {
        "iris-reveal-wrapper"
    };
    let section_class = reveal_class(&format!("{class} snap-section page-wrap"), open);

    rsx! {
        div {
            class: "{wrapper}",
            div {
                class: "mesh-bg",
                div { class: "blob blob-1" }
                div { class: "blob blob-2" }
            }
            section {
                id: section.dom_id(),
                class: "{section_class}",
                {children}
            }
        }
    }
}

#[component]
fn SectionHead(subtitle: String, title: String) -> Element {
    rsx! {
        div {
            class: "section-head",
            span { class: "section-subtitle", "{subtitle}" }
            h2 { class: "section-title", "{title}" }
        }
    }
}
