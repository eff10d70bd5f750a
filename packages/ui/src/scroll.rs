//! Window scroll position and smooth in-page jumps.
//!
//! One [`ScrollController`] is created by the app root. It mirrors
//! `window.scrollY` into a signal from a single scroll listener and performs
//! jumps to sections with a fixed header offset.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom::{self, ScrollListener};

/// Height kept clear above a section after a jump (the fixed navbar).
pub const HEADER_OFFSET: f64 = 70.0;
/// Scroll distance after which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

#[derive(Clone, Copy, PartialEq)]
pub struct ScrollController {
    y: Signal<f64>,
}

impl ScrollController {
    /// Current vertical scroll position. Subscribes the caller.
    pub fn y(&self) -> f64 {
        *self.y.read()
    }

    pub fn is_scrolled(&self) -> bool {
        is_scrolled(self.y())
    }

    /// Smoothly scroll so that `#id` sits just below the navbar.
    pub fn jump_to(&self, id: &str) {
        match dom::element_top(id) {
            Some(top) => dom::smooth_scroll_to(jump_target(top, HEADER_OFFSET)),
            None => tracing::debug!("Cannot jump to missing #{id}"),
        }
    }
}

pub fn is_scrolled(y: f64) -> bool {
    y > SCROLLED_THRESHOLD
}

/// Scroll position for a section whose document top is `element_top`.
pub fn jump_target(element_top: f64, offset: f64) -> f64 {
    (element_top - offset).max(0.0)
}

/// Create the controller and provide it to descendants. Call once at the root.
pub fn use_scroll_provider() -> ScrollController {
    let mut y = use_signal(dom::scroll_y);
    let listener: Rc<Cell<Option<ScrollListener>>> = use_hook(|| Rc::new(Cell::new(None)));

    let slot = listener.clone();
    use_effect(move || {
        slot.set(ScrollListener::attach(move |pos| y.set(pos)));
    });
    use_drop(move || drop(listener.take()));

    use_context_provider(|| ScrollController { y })
}

pub fn use_scroll() -> ScrollController {
    use_context::<ScrollController>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn test_jump_target_keeps_header_clear() {
        assert_eq!(jump_target(1000.0, HEADER_OFFSET), 930.0);
        assert_eq!(jump_target(30.0, HEADER_OFFSET), 0.0);
    }
}
