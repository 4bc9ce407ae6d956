//! Gallery navigation state: the index of the artwork currently on screen.
//!
//! The index always refers to the sorted collection and stays inside
//! `[0, len - 1]`. Moves past either edge are no-ops.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Separator between the current position and the total in the index label.
pub const INDEX_SEPARATOR: &str = " of ";

/// A user-initiated move through the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    /// Direct selection, e.g. a thumbnail click.
    JumpTo(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    current_index: usize,
    len: usize,
}

impl GalleryState {
    /// Fresh state for a collection of `len` slides, starting at the first.
    pub fn new(len: usize) -> Self {
        Self { current_index: 0, len }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.len
    }

    /// Index `nav` would land on, or `None` when it would not move.
    pub fn target(&self, nav: Navigation) -> Option<usize> {
        let target = match nav {
            Navigation::Previous => self.current_index.checked_sub(1)?,
            Navigation::Next if self.can_go_next() => self.current_index + 1,
            Navigation::Next => return None,
            Navigation::JumpTo(index) if index < self.len => index,
            Navigation::JumpTo(_) => return None,
        };
        (target != self.current_index).then_some(target)
    }

    /// Apply `nav`; returns whether the index changed.
    pub fn apply(&mut self, nav: Navigation) -> bool {
        match self.target(nav) {
            Some(index) => {
                self.current_index = index;
                true
            }
            None => false,
        }
    }

    /// Slide notification from the gallery widget. Out-of-range indices are clamped.
    pub fn slide_to(&mut self, index: usize) {
        self.current_index = index.min(self.len.saturating_sub(1));
    }

    /// One-based position label, e.g. `"3 of 24"`.
    pub fn index_label(&self) -> String {
        if self.is_empty() {
            return format!("0{INDEX_SEPARATOR}0");
        }
        format!("{}{INDEX_SEPARATOR}{}", self.current_index + 1, self.len)
    }
}

/// Map a horizontal touch gesture to a navigation.
///
/// Swiping left (finger moves toward smaller x) advances; swiping right goes back.
pub fn swipe_navigation(start_x: f64, end_x: f64) -> Option<Navigation> {
    let delta = end_x - start_x;
    if delta.abs() < SWIPE_THRESHOLD_PX {
        None
    } else if delta < 0.0 {
        Some(Navigation::Next)
    } else {
        Some(Navigation::Previous)
    }
}

/// Map a `KeyboardEvent.key` value to a navigation.
pub fn key_navigation(key: &str) -> Option<Navigation> {
    match key {
        "ArrowLeft" => Some(Navigation::Previous),
        "ArrowRight" => Some(Navigation::Next),
        _ => None,
    }
}
