use api::Skill;
use dioxus::prelude::*;

use super::{use_public_list, SectionFrame, SectionHead};
use crate::reveal::{use_reveal, SectionId};

/// The marquee loops seamlessly by rendering the list three times.
pub fn marquee_track(skills: &[Skill]) -> Vec<Skill> {
    [skills, skills, skills].concat()
}

#[component]
pub fn Skills() -> Element {
    let skills = use_public_list::<Skill>();
    let revealed = use_reveal(SectionId::Skills);
    let track = marquee_track(&skills.read());

    rsx! {
        SectionFrame {
            section: SectionId::Skills,
            class: "skills-section",
            revealed: revealed(),
            SectionHead { subtitle: "Abilities", title: "My Skills" }
            div {
                class: "marquee-container",
                div {
                    class: "marquee-track",
                    for (i, skill) in track.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "skill-item marquee-item",
                            style: "--i: {i}",
                            div {
                                class: "skill-content",
                                if !skill.icon.is_empty() {
                                    img { src: "{skill.icon}", alt: "{skill.name}", class: "skill-icon" }
                                }
                                span { class: "skill-name", "{skill.name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
