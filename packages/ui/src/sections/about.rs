use dioxus::prelude::*;

use super::{use_about_profile, SectionFrame};
use crate::reveal::{use_reveal, use_reveal_bus, SectionId};
use crate::scroll::use_scroll;

const BIO_LOADING: &str = "Loading...";
const BIO_FAILED: &str = "Failed to load biography. Please try again later.";
const DEFAULT_RESUME: &str = "/resume.pdf";

/// Bio text: the profile's when loaded, otherwise a placeholder that turns
/// into an apology once the section has been seen.
pub fn bio_text(bio: Option<&str>, revealed: bool) -> &str {
    match bio {
        Some(bio) => bio,
        None if revealed => BIO_FAILED,
        None => BIO_LOADING,
    }
}

#[component]
pub fn About() -> Element {
    let profile = use_about_profile();
    let revealed = use_reveal(SectionId::About);
    let scroll = use_scroll();
    let mut bus = use_reveal_bus();

    let about = profile();
    let bio = bio_text(about.as_ref().map(|p| p.bio.as_str()), revealed()).to_string();
    let details: Vec<(&'static str, String)> = about
        .as_ref()
        .map(|p| {
            p.details()
                .into_iter()
                .map(|(label, value)| (label, value.to_string()))
                .collect()
        })
        .unwrap_or_default();
    let resume = about
        .as_ref()
        .and_then(|p| p.resume_link.clone())
        .unwrap_or_else(|| DEFAULT_RESUME.to_string());

    rsx! {
        SectionFrame {
            section: SectionId::About,
            class: "about-section",
            revealed: revealed(),
            div {
                class: "about-grid",
                div {
                    class: "about-right",
                    div {
                        class: "about-content",
                        span { class: "section-subtitle", "About Me" }
                        h2 { class: "section-title", "Professional Profile" }
                        p { class: "bio-text", "{bio}" }
                        div {
                            class: "details-list",
                            for (i, (label, value)) in details.into_iter().enumerate() {
                                div {
                                    key: "{label}",
                                    class: "detail-item",
                                    style: "--i: {i}",
                                    span { class: "label", "{label}:" }
                                    span { class: "value", "{value}" }
                                }
                            }
                        }
                        div {
                            class: "about-ctas",
                            a {
                                class: "btn primary",
                                href: "{resume}",
                                target: "_blank",
                                rel: "noreferrer",
                                "Resume"
                            }
                            button {
                                class: "btn ghost",
                                onclick: move |_| {
                                    scroll.jump_to(SectionId::Services.dom_id());
                                    bus.retrigger(SectionId::Services);
                                },
                                "My Services"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bio_placeholders() {
        assert_eq!(bio_text(None, false), "Loading...");
        assert_eq!(
            bio_text(None, true),
            "Failed to load biography. Please try again later."
        );
        assert_eq!(bio_text(Some("Hello"), false), "Hello");
    }
}
