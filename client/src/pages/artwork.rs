//! Artwork page: sorted gallery with a placard for the slide on screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page builds the catalog once, projects it into the desktop and mobile
//! collections, and owns the only writable `GalleryState`. Exactly one gallery
//! variant is mounted, chosen by the tracked viewport layout; both variants
//! index the same sorted order, so the current index survives a resize.

use leptos::prelude::*;

use crate::catalog::{Catalog, ImageDescriptor, ImageMetadata, Presentation};
use crate::components::gallery::Gallery;
use crate::components::placard::Placard;
use crate::state::gallery::GalleryState;
use crate::state::viewport::Layout;
use crate::util::background::{restore_body_background, set_body_background};
use crate::util::theme::Theme;
use crate::util::viewport::use_layout;

#[cfg(test)]
#[path = "artwork_test.rs"]
mod artwork_test;

pub const PAGE_TITLE: &str = "Art Collection";

/// Desktop and mobile projections of one catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collections {
    pub desktop: Vec<ImageDescriptor>,
    pub mobile: Vec<ImageDescriptor>,
}

impl Collections {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            desktop: catalog.descriptors(Presentation::DESKTOP),
            mobile: catalog.descriptors(Presentation::MOBILE),
        }
    }

    pub fn for_layout(&self, layout: Layout) -> &[ImageDescriptor] {
        match layout {
            Layout::Desktop => &self.desktop,
            Layout::Mobile => &self.mobile,
        }
    }

    /// Metadata for the placard under the `layout` gallery at `index`.
    pub fn placard_metadata(&self, layout: Layout, index: usize) -> Option<ImageMetadata> {
        self.for_layout(layout).get(index).map(|item| item.metadata.clone())
    }
}

#[component]
pub fn ArtworkPage() -> impl IntoView {
    let theme = Theme::DEFAULT;

    let previous_background = set_body_background(theme.black);
    on_cleanup(move || restore_body_background(previous_background));

    let body = match Catalog::bundled() {
        Ok(catalog) => view! { <ArtworkGallery catalog=catalog theme=theme/> }.into_any(),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("artwork catalog failed to load: {e}");
            view! { <p class="artwork__error">{format!("Artwork unavailable: {e}")}</p> }.into_any()
        }
    };

    view! {
        <div class="artwork" style=theme.display_font_style()>
            <div class="artwork__viewport">
                <div class="artwork__frame" style=theme.frame_style()>
                    <div class="artwork__title" style=theme.title_style()>{PAGE_TITLE}</div>
                    <div class="artwork__gallery-box">
                        <div class="artwork__container">{body}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ArtworkGallery(catalog: Catalog, theme: Theme) -> impl IntoView {
    let layout = use_layout();
    let gallery = RwSignal::new(GalleryState::new(catalog.len()));
    let collections = StoredValue::new(Collections::from_catalog(&catalog));

    let on_slide = Callback::new(move |index: usize| gallery.update(|g| g.slide_to(index)));

    let gallery_view = move || {
        let layout = layout.get();
        let items = collections.with_value(|c| c.for_layout(layout).to_vec());
        view! { <Gallery items=items state=gallery on_slide=on_slide presentation=layout.presentation()/> }
    };

    let placard_view = move || {
        let index = gallery.get().current_index();
        collections
            .with_value(|c| c.placard_metadata(layout.get(), index))
            .map(|metadata| view! { <Placard metadata=metadata theme=theme/> })
    };

    view! {
        <br/>
        {gallery_view}
        {placard_view}
    }
}
