use api::{split_timeline, TimelineEntry};
use dioxus::prelude::*;

use super::{use_public_list, SectionFrame, SectionHead};
use crate::reveal::{use_reveal, SectionId};

#[component]
pub fn Education() -> Element {
    let entries = use_public_list::<TimelineEntry>();
    let revealed = use_reveal(SectionId::Education);
    let (education, experience) = split_timeline(&entries.read());

    rsx! {
        SectionFrame {
            section: SectionId::Education,
            class: "education-section",
            revealed: revealed(),
            SectionHead { subtitle: "Quality", title: "Summary" }
            div {
                class: "quality-grid",
                TimelineColumn { title: "Education", entries: education, stagger: 0 }
                TimelineColumn { title: "Experience", entries: experience, stagger: 2 }
            }
        }
    }
}

/// One column of timeline cards. `stagger` offsets the animation index.
#[component]
fn TimelineColumn(title: String, entries: Vec<TimelineEntry>, stagger: usize) -> Element {
    rsx! {
        div {
            class: "quality-column",
            h3 { class: "column-title", "{title}" }
            div {
                class: "timeline-container",
                for (i, item) in entries.into_iter().enumerate().map(|(i, e)| (i + stagger, e)) {
                    div {
                        key: "{i}",
                        class: "timeline-card",
                        style: "--i: {i}",
                        div { class: "timeline-dot" }
                        h4 { class: "card-title", "{item.title}" }
                        p { class: "card-meta", "{item.institution} | {item.year}" }
                        p { class: "card-desc", "{item.desc}" }
                    }
                }
            }
        }
    }
}
