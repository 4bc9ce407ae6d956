//! Text panel describing the artwork on screen.

use leptos::prelude::*;

use crate::catalog::ImageMetadata;
use crate::util::theme::Theme;

#[cfg(test)]
#[path = "placard_test.rs"]
mod placard_test;

pub const PLACARD_SEPARATOR: &str = "•";
pub const MARKETPLACE_LOGO_SRC: &str = "/opensea.svg";

/// Display strings for one placard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacardContent {
    /// Upper-cased artist name.
    pub artist: String,
    pub title: String,
    pub medium: String,
    pub year: String,
    /// Marketplace listing, verbatim.
    pub href: String,
}

impl PlacardContent {
    pub fn from_metadata(metadata: &ImageMetadata) -> Self {
        Self {
            artist: metadata.artist.to_uppercase(),
            title: metadata.title.clone(),
            medium: metadata.medium.clone(),
            year: metadata.year.clone(),
            href: metadata.opensea_url.clone(),
        }
    }
}

#[component]
pub fn Placard(metadata: ImageMetadata, theme: Theme) -> impl IntoView {
    let content = PlacardContent::from_metadata(&metadata);

    view! {
        <div class="placard" style=theme.placard_style()>
            <div class="placard__row">
                <div class="placard__artist">{content.artist}</div>
                <div class="placard__separator">{PLACARD_SEPARATOR}</div>
                <div class="placard__body">
                    <b>{content.title}</b>
                </div>
            </div>
            <div class="placard__row">
                <div class="placard__body">{content.medium}</div>
                <div class="placard__separator">{PLACARD_SEPARATOR}</div>
                <div class="placard__body">{content.year}</div>
            </div>
            <div class="placard__row">
                <a href=content.href>
                    <img class="placard__logo" alt="o" src=MARKETPLACE_LOGO_SRC/>
                </a>
            </div>
        </div>
    }
}
