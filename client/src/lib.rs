//! # portfolio-client
//!
//! Leptos frontend for the personal portfolio site: a contact page and an
//! artwork gallery with a metadata placard beneath the current image.
//!
//! The crate is compiled with `ssr` for server rendering and with `hydrate`
//! to WASM for the browser. Catalog assembly, gallery navigation and the
//! viewport predicate are plain Rust so they can be tested without a browser.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the server-rendered markup to the reactive tree.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
