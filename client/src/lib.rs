//! # client
//!
//! Leptos + WASM frontend for the product advisor: a recommendation chat and
//! an analytics dashboard, both backed by the JSON API under `/api`.
//!
//! Conversation and analytics semantics live in the framework-agnostic
//! `advisor` crate. This crate owns views, reactive state wiring, and the
//! browser HTTP transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
