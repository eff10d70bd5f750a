//! Fixed landing-page header.
//!
//! The active link follows whichever section last crossed 20% visibility. The
//! bar hides itself while the hero is active and the page is at the top, and
//! switches to its compact style once scrolled.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::auth::use_site_config;
use crate::dom::Observer;
use crate::reveal::{use_reveal_bus, SectionId};
use crate::scroll::use_scroll;
use crate::NAVBAR_CSS;

/// Visibility ratio at which a section becomes the active link.
pub const ACTIVE_THRESHOLD: f64 = 0.2;

/// Links left of the brand; the rest go on the right.
const LEFT_LINKS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active: SectionId,
    /// Mobile menu.
    pub open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: SectionId::Home,
            open: false,
        }
    }
}

impl NavState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link was clicked: highlight it and close the mobile menu.
    pub fn select(&mut self, section: SectionId) {
        self.active = section;
        self.open = false;
    }

    /// The observer saw `dom_id` enter the viewport.
    pub fn observe(&mut self, dom_id: &str) {
        if let Some(section) = SectionId::from_dom_id(dom_id) {
            self.active = section;
        }
    }

    pub fn is_home_top(&self, scrolled: bool) -> bool {
        self.active == SectionId::Home && !scrolled
    }

    pub fn header_class(&self, scrolled: bool) -> String {
        let mut class = String::from("navbar");
        if self.open {
            class.push_str(" open");
        }
        if scrolled {
            class.push_str(" scrolled");
        }
        if self.is_home_top(scrolled) {
            class.push_str(" hidden");
        }
        class
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut nav = use_signal(NavState::default);
    let scroll = use_scroll();
    let mut bus = use_reveal_bus();
    let brand = use_site_config().site.owner.to_uppercase();
    let observer: Rc<Cell<Option<Observer>>> = use_hook(|| Rc::new(Cell::new(None)));

    let slot = observer.clone();
    use_effect(move || {
        let ids = SectionId::ALL.map(SectionId::dom_id);
        slot.set(Observer::watch(&ids, ACTIVE_THRESHOLD, move |id| {
            nav.write().observe(&id)
        }));
    });
    use_drop(move || drop(observer.take()));

    let mut go = move |section: SectionId| {
        nav.write().select(section);
        scroll.jump_to(section.dom_id());
        bus.retrigger(section);
    };

    let state = nav();
    let header_class = state.header_class(scroll.is_scrolled());
    let mobile_class = if state.open {
        "mobile-nav open"
    } else {
        "mobile-nav"
    };
    let (left, right) = SectionId::ALL.split_at(LEFT_LINKS);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        header {
            class: "{header_class}",
            div {
                class: "nav-inner",
                nav {
                    class: "nav-links desktop-only",
                    for section in left.iter().copied() {
                        NavLink { key: "{section.dom_id()}", section, active: state.active, on_select: move |s| go(s) }
                    }
                }
                div {
                    class: "brand",
                    a {
                        href: "#home",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            go(SectionId::Home);
                        },
                        "{brand}"
                        span { "." }
                    }
                }
                nav {
                    class: "nav-links desktop-only",
                    for section in right.iter().copied() {
                        NavLink { key: "{section.dom_id()}", section, active: state.active, on_select: move |s| go(s) }
                    }
                }
                nav {
                    class: "{mobile_class}",
                    for section in SectionId::ALL {
                        NavLink { key: "mobile-{section.dom_id()}", section, active: state.active, on_select: move |s| go(s) }
                    }
                }
                button {
                    class: "nav-toggle",
                    aria_label: "Toggle navigation",
                    onclick: move |_| nav.write().toggle(),
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

#[component]
fn NavLink(section: SectionId, active: SectionId, on_select: EventHandler<SectionId>) -> Element {
    rsx! {
        a {
            href: "#{section.dom_id()}",
            class: if section == active { "active" } else { "" },
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_select.call(section);
            },
            "{section.label()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_only_at_top_of_hero() {
        let mut nav = NavState::default();
        assert!(nav.is_home_top(false));
        assert_eq!(nav.header_class(false), "navbar hidden");
        assert_eq!(nav.header_class(true), "navbar scrolled");

        nav.observe("skills");
        assert_eq!(nav.active, SectionId::Skills);
        assert_eq!(nav.header_class(false), "navbar");
    }

    #[test]
    fn test_select_closes_mobile_menu() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.open);
        assert!(nav.header_class(true).contains(" open"));

        nav.select(SectionId::Contact);
        assert!(!nav.open);
        assert_eq!(nav.active, SectionId::Contact);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut nav = NavState::default();
        nav.observe("service");
        nav.observe("footer");
        assert_eq!(nav.active, SectionId::Services);
    }
}
