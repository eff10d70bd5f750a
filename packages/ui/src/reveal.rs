//! # One-shot reveal animations
//!
//! Every public section starts hidden and reveals once it scrolls into view
//! (intersection threshold 0). The hero instead reveals after a short timer or
//! as soon as the page is scrolled a little.
//!
//! A reveal can be replayed through the [`RevealBus`] owned by the landing
//! page: the navbar bumps a section's generation when it jumps there, and the
//! section hides itself and reveals again 50 ms later.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom::Observer;
use crate::timer::sleep_ms;

/// Delay between hiding and re-revealing on replay.
pub const REPLAY_DELAY_MS: u64 = 50;
/// Hero reveal timer.
pub const HOME_REVEAL_MS: u64 = 100;
/// Scroll distance that reveals the hero early.
pub const HOME_REVEAL_SCROLL: f64 = 10.0;

/// Sections of the landing page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Education,
    Skills,
    MyWork,
    Youtube,
    Services,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Skills,
        SectionId::MyWork,
        SectionId::Youtube,
        SectionId::Services,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::MyWork => "my-work",
            SectionId::Youtube => "youtube",
            SectionId::Services => "service",
            SectionId::Contact => "contact",
        }
    }

    /// Navbar label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::MyWork => "My Work",
            SectionId::Youtube => "YouTube",
            SectionId::Services => "Services",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.dom_id() == id)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Replay counters, one per section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealGenerations([u32; 8]);

impl RevealGenerations {
    pub fn get(&self, section: SectionId) -> u32 {
        self.0[section.index()]
    }

    pub fn bump(&mut self, section: SectionId) {
        let slot = &mut self.0[section.index()];
        *slot = slot.wrapping_add(1);
    }
}

/// Re-trigger channel from the navbar to the sections.
#[derive(Clone, Copy, PartialEq)]
pub struct RevealBus {
    generations: Signal<RevealGenerations>,
}

impl RevealBus {
    /// Replay the reveal animation of `section`.
    pub fn retrigger(&mut self, section: SectionId) {
        self.generations.write().bump(section);
    }

    pub fn generation(&self, section: SectionId) -> u32 {
        self.generations.read().get(section)
    }
}

/// Create the bus and provide it to descendants. Call once in the landing page.
pub fn use_reveal_bus_provider() -> RevealBus {
    let generations = use_signal(RevealGenerations::default);
    use_context_provider(|| RevealBus { generations })
}

pub fn use_reveal_bus() -> RevealBus {
    use_context::<RevealBus>()
}

/// Whether `section` is currently revealed.
pub fn use_reveal(section: SectionId) -> Signal<bool> {
    let mut revealed = use_signal(|| false);
    let bus = use_reveal_bus();
    let observer: Rc<Cell<Option<Observer>>> = use_hook(|| Rc::new(Cell::new(None)));

    // `section` is fixed per caller, so the hook order is stable.
    if section == SectionId::Home {
        use_home_trigger(revealed);
    } else {
        let slot = observer.clone();
        use_effect(move || {
            let watched = Observer::watch(&[section.dom_id()], 0.0, move |_| revealed.set(true));
            match watched {
                Some(watched) => slot.set(Some(watched)),
                // Nothing to observe with: show the content right away.
                None => revealed.set(true),
            }
        });
    }

    use_drop(move || drop(observer.take()));

    // Replays: the first generation seen is the baseline, later bumps replay.
    let seen = use_hook(|| Rc::new(Cell::new(None::<u32>)));
    use_effect(move || {
        let generation = bus.generation(section);
        let previous = seen.replace(Some(generation));
        if previous.is_some_and(|p| p != generation) {
            revealed.set(false);
            spawn(async move {
                sleep_ms(REPLAY_DELAY_MS).await;
                revealed.set(true);
            });
        }
    });

    revealed
}

/// Hero trigger: a short timer, or the first scroll past the threshold.
fn use_home_trigger(mut revealed: Signal<bool>) {
    let scroll = crate::scroll::use_scroll();

    use_future(move || async move {
        sleep_ms(HOME_REVEAL_MS).await;
        revealed.set(true);
    });

    use_effect(move || {
        if scroll.y() > HOME_REVEAL_SCROLL && !*revealed.peek() {
            revealed.set(true);
        }
    });
}

/// `"{base} reveal"` once revealed, `base` otherwise.
pub fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{base} reveal")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_ids_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_dom_id(section.dom_id()), Some(section));
        }
        assert_eq!(SectionId::from_dom_id("nowhere"), None);
        assert_eq!(SectionId::Services.dom_id(), "service");
        assert_eq!(SectionId::MyWork.dom_id(), "my-work");
    }

    #[test]
    fn test_generations_are_per_section() {
        let mut generations = RevealGenerations::default();
        generations.bump(SectionId::Skills);
        generations.bump(SectionId::Skills);
        generations.bump(SectionId::Contact);
        assert_eq!(generations.get(SectionId::Skills), 2);
        assert_eq!(generations.get(SectionId::Contact), 1);
        assert_eq!(generations.get(SectionId::Home), 0);
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class("skills-section", false), "skills-section");
        assert_eq!(reveal_class("skills-section", true), "skills-section reveal");
    }
}
