//! Palette, fonts, and inline style builders.
//!
//! DESIGN
//! ======
//! A single immutable [`Theme`] value is handed to components as a prop; no
//! component reads colors or fonts from global state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub off_white: &'static str,
    pub black: &'static str,
    pub accent: &'static str,
    pub display_font: &'static str,
    pub title_size_px: u32,
    pub body_size_px: u32,
}

impl Theme {
    pub const DEFAULT: Self = Self {
        off_white: "#f5f5f5",
        black: "#000000",
        accent: "#c9a227",
        display_font: "\"Raleway\", sans-serif",
        title_size_px: 36,
        body_size_px: 16,
    };

    /// Full-viewport bordered box around the artwork page.
    pub fn frame_style(&self) -> String {
        format!(
            "height: calc(100% - 20px); width: calc(100% - 20px); box-sizing: border-box; \
             border: solid 1px {fg}; color: {fg}; background-color: {bg}; margin: 10px;",
            fg = self.off_white,
            bg = self.black,
        )
    }

    /// Light display type used across the artwork page.
    pub fn display_font_style(&self) -> String {
        format!("font-family: {}; font-weight: lighter;", self.display_font)
    }

    pub fn title_style(&self) -> String {
        format!(
            "font-family: {}; margin: 1em 1em 0 1em; font-size: {}px; font-weight: lighter;",
            self.display_font, self.title_size_px
        )
    }

    /// Plain page body used by the contact page.
    pub fn page_style(&self) -> String {
        format!(
            "font-family: {}; font-size: {}px; color: {}; background-color: {};",
            self.display_font, self.body_size_px, self.black, self.off_white
        )
    }

    pub fn link_style(&self, hovered: bool) -> String {
        let color = if hovered { self.accent } else { self.black };
        format!("color: {color}; text-decoration: none; border-bottom: 1px solid {color};")
    }

    pub fn placard_style(&self) -> String {
        format!("display: block; font-size: {}px; margin-top: 1em;", self.body_size_px)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
