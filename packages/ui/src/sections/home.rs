use dioxus::prelude::*;

use super::{use_about_profile, SectionFrame};
use crate::auth::use_site_config;
use crate::reveal::{use_reveal, use_reveal_bus, SectionId};
use crate::scroll::use_scroll;
use crate::typewriter::use_typewriter;

/// Hero: greeting, typewriter over the profile roles and two calls to action.
#[component]
pub fn Home() -> Element {
    let config = use_site_config();
    let profile = use_about_profile();
    let revealed = use_reveal(SectionId::Home);
    let scroll = use_scroll();
    let mut bus = use_reveal_bus();

    let fallback_roles = config.site.default_roles.clone();
    let roles = use_memo(move || {
        profile
            .read()
            .as_ref()
            .map(|p| p.roles.clone())
            .filter(|roles| !roles.is_empty())
            .unwrap_or_else(|| fallback_roles.clone())
    });
    let role_text = use_typewriter(roles);

    let description = profile
        .read()
        .as_ref()
        .map(|p| p.home_description.clone())
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| config.site.hero_description.clone());

    rsx! {
        SectionFrame {
            section: SectionId::Home,
            class: "home-hero",
            revealed: revealed(),
            div {
                class: "hero-inner",
                div {
                    class: "hero-intro",
                    span { class: "greeting", "Welcome to my Portfolio" }
                    h1 {
                        class: "name",
                        "I'm "
                        span { class: "highlight", "{config.site.owner}" }
                    }
                    h2 {
                        class: "role-typing",
                        "I am a "
                        span {
                            class: "typewriter-text",
                            "{role_text}"
                            span { class: "cursor", "|" }
                        }
                    }
                    p { class: "description", "{description}" }
                    div {
                        class: "cta-group",
                        button {
                            class: "btn primary",
                            onclick: move |_| {
                                scroll.jump_to(SectionId::MyWork.dom_id());
                                bus.retrigger(SectionId::MyWork);
                            },
                            "Hire Me"
                        }
                        button {
                            class: "btn ghost",
                            onclick: move |_| {
                                scroll.jump_to(SectionId::Contact.dom_id());
                                bus.retrigger(SectionId::Contact);
                            },
                            "Contact Me"
                        }
                    }
                }
            }
        }
    }
}
