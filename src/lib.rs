//! # agency-client
//!
//! Leptos + WASM frontend for the influencer booking form. Collects a
//! product image plus campaign, brand, and vibe fields, and submits them
//! as multipart form data to the agency backend.
//!
//! This crate contains the page, the form component, replace-on-write
//! form state, the HTTP submission layer, and browser-environment
//! helpers (API base resolution, object-URL previews).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
