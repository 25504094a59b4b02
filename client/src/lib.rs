//! # postboard-client
//!
//! Leptos + WASM frontend for postboard: a single posts page gated on the
//! browser session.
//!
//! This crate contains the page, its view state, the session client reading
//! the stored identity delegation, and the HTTP client for the posts actor.
//! The `postboard` host crate renders it with the `ssr` feature.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
