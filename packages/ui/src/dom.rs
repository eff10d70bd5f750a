//! Thin browser bindings: intersection observers, the window scroll listener
//! and smooth scrolling. Native builds get inert stand-ins so components still
//! render (and tests still run) off the browser.

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    /// Watches elements by id; disconnects when dropped.
    pub struct Observer {
        observer: web_sys::IntersectionObserver,
        _callback: EntriesCallback,
    }

    impl Observer {
        /// Call `on_visible(id)` whenever one of `ids` starts intersecting the
        /// viewport by at least `threshold`.
        pub fn watch(
            ids: &[&str],
            threshold: f64,
            mut on_visible: impl FnMut(String) + 'static,
        ) -> Option<Self> {
            let callback: EntriesCallback = Closure::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            on_visible(entry.target().id());
                        }
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .inspect_err(|e| tracing::warn!("IntersectionObserver unavailable: {e:?}"))
            .ok()?;

            let document = web_sys::window()?.document()?;
            for id in ids {
                match document.get_element_by_id(id) {
                    Some(element) => observer.observe(&element),
                    None => tracing::debug!("No element #{id} to observe"),
                }
            }

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for Observer {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    /// `window.onscroll` subscription; removed when dropped.
    pub struct ScrollListener {
        callback: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let callback: Closure<dyn FnMut()> = Closure::new(move || {
                if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                    on_scroll(y);
                }
            });
            window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .inspect_err(|e| tracing::warn!("Failed to listen for scroll: {e:?}"))
                .ok()?;
            Some(Self { callback })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    pub fn scroll_y() -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    /// Document-relative top of `#id`.
    pub fn element_top(id: &str) -> Option<f64> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(id)?;
        let body = document.body()?;
        Some(element.get_bounding_client_rect().top() - body.get_bounding_client_rect().top())
    }

    pub fn smooth_scroll_to(top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    pub struct Observer;

    impl Observer {
        pub fn watch(
            _ids: &[&str],
            _threshold: f64,
            _on_visible: impl FnMut(String) + 'static,
        ) -> Option<Self> {
            None
        }
    }

    pub struct ScrollListener;

    impl ScrollListener {
        pub fn attach(_on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
            None
        }
    }

    pub fn scroll_y() -> f64 {
        0.0
    }

    pub fn element_top(_id: &str) -> Option<f64> {
        None
    }

    pub fn smooth_scroll_to(_top: f64) {}
}

pub use browser::{element_top, scroll_y, smooth_scroll_to, Observer, ScrollListener};
