//! Browser window width tracking for the viewport predicate.
//!
//! The reactive layout starts as [`Layout::Desktop`] so hydration matches the
//! server markup, then re-evaluates from `window.innerWidth` once mounted and
//! on every `resize`.

use leptos::prelude::*;

use crate::state::viewport::{Layout, layout_for_width};

/// Current `window.innerWidth` in CSS pixels; `None` outside a browser.
pub fn window_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Reactive layout that follows the browser window width.
pub fn use_layout() -> ReadSignal<Layout> {
    let (layout, set_layout) = signal(Layout::default());

    let refresh = move || {
        if let Some(width) = window_width() {
            let next = layout_for_width(width);
            if layout.get_untracked() != next {
                #[cfg(feature = "hydrate")]
                log::debug!("layout changed to {next:?} at {width}px");
                set_layout.set(next);
            }
        }
    };

    // Effects only run in the browser, after hydration.
    Effect::new(refresh);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| refresh());
        on_cleanup(move || handle.remove());
    }

    layout
}
