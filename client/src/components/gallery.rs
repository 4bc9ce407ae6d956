//! Navigable image strip with optional thumbnails.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery never owns the slide index. It reads [`GalleryState`] and
//! reports the index the user navigated to through `on_slide`; the page
//! applies it. Navigation is user-driven only: buttons, thumbnails, arrow
//! keys, and horizontal swipes.

use leptos::prelude::*;

use crate::catalog::{ImageDescriptor, Presentation, ThumbnailPosition};
#[cfg(feature = "hydrate")]
use crate::state::gallery::{key_navigation, swipe_navigation};
use crate::state::gallery::{GalleryState, Navigation};

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Icon edge length, in pixels, for the previous/next chevrons.
const CHEVRON_SIZE: &str = "36";

/// Inline style for an image rendered at `height` pixels.
pub fn height_style(height: u32) -> String {
    format!("height: {height}px;")
}

/// Root-relative URL for an asset path, so images resolve from any page URL.
pub fn asset_src(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Accessible name for the thumbnail at zero-based `index`.
pub fn thumbnail_label(index: usize) -> String {
    format!("Go to Slide {}", index + 1)
}

/// Modifier class for the gallery root, driven by thumbnail placement.
pub fn gallery_class(presentation: Presentation) -> &'static str {
    match (presentation.show_thumbnails, presentation.thumbnail_position) {
        (false, _) => "gallery gallery--no-thumbnails",
        (true, ThumbnailPosition::Top) => "gallery gallery--thumbnails-top",
        (true, ThumbnailPosition::Bottom) => "gallery gallery--thumbnails-bottom",
    }
}

#[component]
pub fn Gallery(
    items: Vec<ImageDescriptor>,
    #[prop(into)] state: Signal<GalleryState>,
    on_slide: Callback<usize>,
    presentation: Presentation,
) -> impl IntoView {
    let items = StoredValue::new(items);

    let navigate = move |nav: Navigation| {
        if let Some(index) = state.get_untracked().target(nav) {
            #[cfg(feature = "hydrate")]
            log::debug!("gallery slide {nav:?} -> {index}");
            on_slide.run(index);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if let Some(nav) = key_navigation(&ev.key()) {
                navigate(nav);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let touch_start_x = StoredValue::new(None::<f64>);
    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        {
            let x = ev.changed_touches().get(0).map(|t| f64::from(t.client_x()));
            touch_start_x.set_value(x);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };
    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        let start = touch_start_x.get_value();
        touch_start_x.set_value(None);
        #[cfg(feature = "hydrate")]
        {
            let end = ev.changed_touches().get(0).map(|t| f64::from(t.client_x()));
            if let (Some(start), Some(end)) = (start, end) {
                if let Some(nav) = swipe_navigation(start, end) {
                    navigate(nav);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, start);
        }
    };

    let current = move || items.with_value(|all| all.get(state.get().current_index()).cloned());

    let strip = presentation.show_thumbnails.then(|| {
        let thumbnails = items.with_value(|all| {
            all.iter()
                .enumerate()
                .map(|(index, item)| {
                    let src = asset_src(&item.thumbnail);
                    let alt = item.metadata.title.clone();
                    let style = height_style(item.thumbnail_height);
                    view! {
                        <button
                            type="button"
                            class="gallery__thumbnail"
                            class:gallery__thumbnail--active=move || state.get().current_index() == index
                            aria-label=thumbnail_label(index)
                            on:click=move |_| navigate(Navigation::JumpTo(index))
                        >
                            <img src=src alt=alt style=style/>
                        </button>
                    }
                })
                .collect_view()
        });
        view! { <div class="gallery__thumbnails">{thumbnails}</div> }.into_any()
    });
    let (top_strip, bottom_strip) = match presentation.thumbnail_position {
        ThumbnailPosition::Top => (strip, None),
        ThumbnailPosition::Bottom => (None, strip),
    };

    view! {
        <div class=gallery_class(presentation)>
            {top_strip}
            <div class="gallery__slide" on:touchstart=on_touch_start on:touchend=on_touch_end>
                <button
                    type="button"
                    class="gallery__nav gallery__nav--left"
                    disabled=move || !state.get().can_go_previous()
                    on:click=move |_| navigate(Navigation::Previous)
                    aria-label="Previous Slide"
                >
                    <ChevronIcon points="15 18 9 12 15 6"/>
                </button>
                {move || {
                    current()
                        .map(|item| {
                            view! {
                                <img
                                    class="gallery__image"
                                    src=asset_src(&item.original)
                                    alt=item.metadata.title
                                    style=height_style(item.original_height)
                                />
                            }
                        })
                }}
                <button
                    type="button"
                    class="gallery__nav gallery__nav--right"
                    disabled=move || !state.get().can_go_next()
                    on:click=move |_| navigate(Navigation::Next)
                    aria-label="Next Slide"
                >
                    <ChevronIcon points="9 18 15 12 9 6"/>
                </button>
                <div class="gallery__index">{move || state.get().index_label()}</div>
            </div>
            {bottom_strip}
        </div>
    }
}

/// Feather-style chevron drawn from a single polyline.
#[component]
fn ChevronIcon(points: &'static str) -> impl IntoView {
    view! {
        <svg
            width=CHEVRON_SIZE
            height=CHEVRON_SIZE
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <polyline points=points></polyline>
        </svg>
    }
}
