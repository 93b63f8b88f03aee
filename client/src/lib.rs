//! # client
//!
//! Leptos + WASM front end for the PitchDeck AI Flow pitch-practice product.
//!
//! This crate contains pages, components, the static content tables that
//! parameterize them, and the shared application shell. Screens are
//! presentational: they project read-only record lists into repeated markup
//! fragments and hold no mutable state.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered document in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
