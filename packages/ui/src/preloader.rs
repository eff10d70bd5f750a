//! Intro overlay shown once per page load before the landing page appears.

use dioxus::prelude::*;

use crate::auth::use_site_config;
use crate::timer::sleep_ms;
use crate::PRELOADER_CSS;

/// How long the intro plays before the exit animation starts.
pub const SHOW_MS: u64 = 2800;
/// Length of the exit animation.
pub const EXIT_MS: u64 = 800;

const BUBBLES: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPhase {
    Showing,
    Exiting,
    Done,
}

impl PreloaderPhase {
    /// Next phase and how long the current one lasts. `None` once done.
    pub fn advance(self) -> Option<(u64, PreloaderPhase)> {
        match self {
            PreloaderPhase::Showing => Some((SHOW_MS, PreloaderPhase::Exiting)),
            PreloaderPhase::Exiting => Some((EXIT_MS, PreloaderPhase::Done)),
            PreloaderPhase::Done => None,
        }
    }

    fn overlay_class(self) -> &'static str {
        match self {
            PreloaderPhase::Showing => "preloader-overlay",
            _ => "preloader-overlay exit",
        }
    }
}

/// Deterministic bubble placement: spread across the width with staggered timing.
fn bubble_style(i: usize) -> String {
    let left = (i * 37) % 100;
    let delay = (i * 13) % 50;
    let duration = 30 + (i * 7) % 40;
    format!(
        "left: {left}%; animation-delay: {}.{}s; animation-duration: {}.{}s",
        delay / 10,
        delay % 10,
        duration / 10,
        duration % 10
    )
}

#[component]
pub fn Preloader(on_complete: EventHandler<()>) -> Element {
    let mut phase = use_signal(|| PreloaderPhase::Showing);
    let owner = use_site_config().site.owner.to_uppercase();

    use_future(move || async move {
        loop {
            let current = *phase.peek();
            let Some((wait, next)) = current.advance() else {
                break;
            };
            sleep_ms(wait).await;
            phase.set(next);
        }
        on_complete.call(());
    });

    let class = phase().overlay_class();

    rsx! {
        document::Link { rel: "stylesheet", href: PRELOADER_CSS }
        div {
            class: "{class}",
            div {
                class: "bubbles-container",
                div { class: "big-blob big-blob-1" }
                div { class: "big-blob big-blob-2" }
                div { class: "big-blob big-blob-3" }
                for i in 0..BUBBLES {
                    div {
                        key: "{i}",
                        class: "mini-bubble bubble-{i + 1}",
                        style: "{bubble_style(i)}",
                    }
                }
            }
            div {
                class: "preloader-content",
                div {
                    class: "loading-bar-container",
                    div { class: "loading-progress" }
                }
                div {
                    class: "preloader-text",
                    for (i, ch) in owner.chars().enumerate() {
                        span { key: "{i}", class: "char", "{ch}" }
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
    fn test_phases_run_in_order() {
        let mut phase = PreloaderPhase::Showing;
        let mut waits = Vec::new();
        while let Some((wait, next)) = phase.advance() {
            waits.push(wait);
            phase = next;
        }
        assert_eq!(waits, [2800, 800]);
        assert_eq!(phase, PreloaderPhase::Done);
    }

    #[test]
    fn test_bubble_style_stays_in_bounds() {
        for i in 0..BUBBLES {
            let style = bubble_style(i);
            assert!(style.starts_with("left: "));
            assert!(style.contains("animation-duration: "));
        }
        assert_eq!(
            bubble_style(1),
            "left: 37%; animation-delay: 1.3s; animation-duration: 3.7s"
        );
    }
}
