use api::Service;
use dioxus::prelude::*;

use super::{use_public_list, SectionFrame, SectionHead};
use crate::reveal::{use_reveal, SectionId};

/// Cards are numbered from 01.
fn service_number(index: usize) -> usize {
    index + 1
}

#[component]
pub fn Services() -> Element {
    let services = use_public_list::<Service>();
    let revealed = use_reveal(SectionId::Services);

    rsx! {
        SectionFrame {
            section: SectionId::Services,
            class: "service-section",
            revealed: revealed(),
            SectionHead { subtitle: "Service", title: "What I Do" }
            div {
                class: "service-grid",
                for (i, service) in services().into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "service-card",
                        style: "--i: {i}",
                        div { class: "card-number", "0{service_number(i)}" }
                        div {
                            class: "card-inner",
                            div { class: "service-icon-box", "{service.icon}" }
                            h3 { class: "card-title", "{service.title}" }
                            p { class: "card-desc", "{service.desc}" }
                            div {
                                class: "card-footer",
                                span { class: "read-more", "Learn More" }
                                div { class: "footer-line" }
                            }
                        }
                    }
                }
            }
        }
    }
}
