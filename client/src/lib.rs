//! # client
//!
//! Leptos + WASM front-end for the activity signup system. Lists activities
//! from the backend, lets a student sign up through a form, and removes
//! participants from a roster, re-fetching the list after every change.
//!
//! The crate is built twice: with `hydrate` into the browser bundle, and with
//! `ssr` as a library the `server` crate renders the HTML shell from.

pub mod app;
pub mod components;
pub mod flows;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating activities client");
    leptos::mount::hydrate_body(app::App);
}
