//! # Typewriter effect for the hero role line
//!
//! [`Typewriter`] is a pure state machine: every [`Typewriter::tick`] types or
//! deletes one character and returns how long to wait before the next tick.
//!
//! - typing ticks every 150 ms at first, 200 ms once a role has been deleted
//! - a fully typed role holds for 2000 ms
//! - deleting halves the delay on every character
//! - an emptied role moves on to the next one, wrapping around forever

use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::sleep;

const FIRST_TYPE_MS: f64 = 150.0;
const HOLD_MS: f64 = 2000.0;
const NEXT_ROLE_MS: f64 = 200.0;

/// Roles shown when the profile has none.
pub const DEFAULT_ROLES: [&str; 3] = ["Full Stack Developer", "MCA Student", "UI/UX Designer"];

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    roles: Vec<String>,
    index: usize,
    /// Characters of the current role on screen.
    shown: usize,
    deleting: bool,
    delay_ms: f64,
}

impl Typewriter {
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles: with_fallback(roles),
            index: 0,
            shown: 0,
            deleting: false,
            delay_ms: FIRST_TYPE_MS,
        }
    }

    /// Swap the role list, keeping the position in the cycle.
    pub fn set_roles(&mut self, roles: Vec<String>) {
        self.roles = with_fallback(roles);
        self.shown = self.shown.min(self.role_len());
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    fn current_role(&self) -> &str {
        &self.roles[self.index % self.roles.len()]
    }

    fn role_len(&self) -> usize {
        self.current_role().chars().count()
    }

    /// Text currently on screen.
    pub fn text(&self) -> String {
        self.current_role().chars().take(self.shown).collect()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Delay before the next tick.
    pub fn delay(&self) -> Duration {
        Duration::from_secs_f64(self.delay_ms / 1000.0)
    }

    /// Advance by one character and return the delay before the next tick.
    pub fn tick(&mut self) -> Duration {
        let len = self.role_len();
        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            self.delay_ms /= 2.0;
        } else {
            self.shown = (self.shown + 1).min(len);
        }

        if !self.deleting && self.shown == len {
            self.deleting = true;
            self.delay_ms = HOLD_MS;
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.roles.len();
            self.delay_ms = NEXT_ROLE_MS;
        }
        self.delay()
    }
}

fn with_fallback(roles: Vec<String>) -> Vec<String> {
    let roles: Vec<String> = roles
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();
    if roles.is_empty() {
        DEFAULT_ROLES.iter().map(|r| r.to_string()).collect()
    } else {
        roles
    }
}

/// Drive a typewriter over `roles` and return the text to display.
pub fn use_typewriter(roles: Memo<Vec<String>>) -> Signal<String> {
    let mut machine = use_signal(|| Typewriter::new(roles.peek().clone()));
    let mut text = use_signal(String::new);

    use_effect(move || {
        let roles = roles();
        if machine.peek().roles() != roles.as_slice() {
            machine.write().set_roles(roles);
        }
    });

    use_future(move || async move {
        loop {
            let delay = machine.peek().delay();
            sleep(delay).await;
            let mut typewriter = machine.write();
            typewriter.tick();
            text.set(typewriter.text());
        }
    });

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Typewriter {
        Typewriter::new(Vec::new())
    }

    /// Tick until `text` shows `target`, returning the texts seen on the way.
    fn run_until(tw: &mut Typewriter, target: &str, limit: usize) -> Vec<String> {
        let mut seen = Vec::new();
        for _ in 0..limit {
            tw.tick();
            seen.push(tw.text());
            if tw.text() == target {
                return seen;
            }
        }
        panic!("never reached {target:?}; last {:?}", seen.last());
    }

    #[test]
    fn test_falls_back_to_default_roles() {
        assert_eq!(defaults().roles(), DEFAULT_ROLES);
        let blank = Typewriter::new(vec!["  ".to_string()]);
        assert_eq!(blank.roles(), DEFAULT_ROLES);
    }

    #[test]
    fn test_types_one_character_per_tick() {
        let mut tw = defaults();
        assert_eq!(tw.delay(), Duration::from_millis(150));
        let seen = run_until(&mut tw, "Full Stack Developer", 50);
        assert_eq!(seen[0], "F");
        assert_eq!(seen[1], "Fu");
        assert_eq!(seen.len(), "Full Stack Developer".len());
        assert!(tw.is_deleting());
        assert_eq!(tw.delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_deleting_halves_delay() {
        let mut tw = defaults();
        run_until(&mut tw, "Full Stack Developer", 50);
        assert_eq!(tw.tick(), Duration::from_millis(1000));
        assert_eq!(tw.text(), "Full Stack Develope");
        assert_eq!(tw.tick(), Duration::from_millis(500));
        assert_eq!(tw.tick(), Duration::from_millis(250));
    }

    #[test]
    fn test_cycles_through_default_roles_and_loops() {
        let mut tw = defaults();
        for role in DEFAULT_ROLES {
            run_until(&mut tw, role, 100);
            let seen = run_until(&mut tw, "", 100);
            assert_eq!(seen.len(), role.len());
            assert!(!tw.is_deleting());
            assert_eq!(tw.delay(), Duration::from_millis(200));
        }
        // Back at the first role, now typing at the steady pace
        assert_eq!(tw.tick(), Duration::from_millis(200));
        assert_eq!(tw.text(), "F");
    }

    #[test]
    fn test_custom_roles() {
        let mut tw = Typewriter::new(vec!["Go".to_string(), "Rust".to_string()]);
        run_until(&mut tw, "Go", 5);
        run_until(&mut tw, "", 5);
        let seen = run_until(&mut tw, "Rust", 10);
        assert_eq!(seen, ["R", "Ru", "Rus", "Rust"]);
    }

    #[test]
    fn test_set_roles_clamps_visible_text() {
        let mut tw = defaults();
        run_until(&mut tw, "Full Stack", 50);
        tw.set_roles(vec!["Go".to_string()]);
        assert_eq!(tw.text(), "Go");
    }
}
