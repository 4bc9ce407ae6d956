//! Viewport predicate: which gallery variant a given window width gets.

use crate::catalog::Presentation;

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Widths below this many CSS pixels render the mobile gallery.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Also the server-rendered layout, before the real width is known.
    #[default]
    Desktop,
    Mobile,
}

impl Layout {
    /// Gallery parameters for this layout.
    pub fn presentation(self) -> Presentation {
        match self {
            Self::Desktop => Presentation::DESKTOP,
            Self::Mobile => Presentation::MOBILE,
        }
    }
}

/// Select the layout for a window `width` in CSS pixels.
pub fn layout_for_width(width: f64) -> Layout {
    if width < MOBILE_BREAKPOINT_PX { Layout::Mobile } else { Layout::Desktop }
}
