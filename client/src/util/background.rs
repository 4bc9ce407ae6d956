//! Document background color for full-bleed pages.
//!
//! Sets `background-color` on `<body>` so overscroll areas match the page.
//! Requires a browser environment; SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

/// Apply `color` to the body background, returning the value it replaced.
pub fn set_body_background(color: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("background-color").ok();
        if let Err(e) = style.set_property("background-color", color) {
            log::warn!("failed to set body background: {e:?}");
        }
        previous
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = color;
        None
    }
}

/// Restore a background previously returned by [`set_body_background`].
pub fn restore_body_background(previous: Option<String>) {
    if let Some(color) = previous {
        set_body_background(&color);
    }
}
