use api::Project;
use dioxus::prelude::*;

use super::{use_public_list, SectionFrame, SectionHead};
use crate::reveal::{use_reveal, SectionId};

/// Filter tabs, in display order. `"All"` disables filtering.
pub const WORK_FILTERS: [&str; 3] = ["All", "Design", "Development"];

/// Projects matching `filter` by exact category, in server order.
pub fn filter_projects(projects: &[Project], filter: &str) -> Vec<Project> {
    if filter == WORK_FILTERS[0] {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| p.category == filter)
        .cloned()
        .collect()
}

#[component]
pub fn MyWork() -> Element {
    let projects = use_public_list::<Project>();
    let revealed = use_reveal(SectionId::MyWork);
    let mut filter = use_signal(|| WORK_FILTERS[0]);

    let visible = filter_projects(&projects.read(), filter());

    rsx! {
        SectionFrame {
            section: SectionId::MyWork,
            class: "portfolio-section",
            revealed: revealed(),
            SectionHead { subtitle: "Portfolio", title: "My Projects" }
            div {
                class: "filter-tabs",
                for cat in WORK_FILTERS {
                    button {
                        key: "{cat}",
                        class: if filter() == cat { "filter-btn active" } else { "filter-btn" },
                        onclick: move |_| filter.set(cat),
                        "{cat}"
                    }
                }
            }
            div {
                class: "portfolio-grid",
                for (i, p) in visible.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "portfolio-item",
                        style: "--i: {i}",
                        div {
                            class: "item-inner",
                            img { src: "{p.image}", alt: "{p.title}", class: "item-img" }
                            div {
                                class: "item-overlay",
                                div {
                                    class: "overlay-content",
                                    h3 { class: "item-title", "{p.title}" }
                                    p { class: "item-cat", "{p.category}" }
                                    a {
                                        href: "{p.link}",
                                        target: "_blank",
                                        rel: "noreferrer",
                                        class: "view-btn",
                                        i { class: "plus-icon", "+" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
