//! Campusly - marketing site, guided product demo and operator console
//!
//! A multi-tenant school platform's public face, built with Leptos and
//! served by axum with server-side rendering and hydration.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
