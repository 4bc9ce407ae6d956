//! Shared page frame and hover-aware links.
//!
//! DESIGN
//! ======
//! Pages compose `PageLayout` around their content instead of extending a
//! base page type; link styling comes from the theme the page passes in.

use leptos::prelude::*;

use crate::util::theme::Theme;

/// Centered content column on the themed page background.
#[component]
pub fn PageLayout(theme: Theme, children: Children) -> impl IntoView {
    view! {
        <main class="page" style=theme.page_style()>
            <div class="page__content">{children()}</div>
        </main>
    }
}

/// Link that switches to the accent color while hovered.
#[component]
pub fn HoverLink(href: &'static str, label: &'static str, theme: Theme) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <a
            class="page__link"
            href=href
            style=move || theme.link_style(hovered.get())
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {label}
        </a>
    }
}
